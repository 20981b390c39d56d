//! Categorical code/label dictionaries.
//!
//! Each categorical feature is stored and scored as a small integer code;
//! the dictionaries carry the human-readable label for every valid code.
//! They are process-wide constants, built once, never mutated.

use crate::schema;

/// One categorical feature's closed code set.
pub struct Dictionary {
    pub feature: &'static str,
    entries: &'static [(i64, &'static str)],
}

impl Dictionary {
    /// All valid codes, in declaration order.
    pub fn codes(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.iter().map(|&(code, _)| code)
    }

    /// Total mapping code -> label.
    pub fn label(&self, code: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|&&(c, _)| c == code)
            .map(|&(_, label)| label)
    }

    /// Best-effort reverse lookup: the first code whose label matches.
    /// Labels are unique per dictionary in practice, but that is not
    /// enforced here.
    pub fn code(&self, label: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|&&(_, l)| l == label)
            .map(|&(code, _)| code)
    }

    /// Labels sorted alphabetically, as the form selectors present them.
    pub fn sorted_labels(&self) -> Vec<&'static str> {
        let mut labels: Vec<&'static str> = self.entries.iter().map(|&(_, l)| l).collect();
        labels.sort_unstable();
        labels
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub const MARITAL_STATUS: Dictionary = Dictionary {
    feature: schema::MARITAL_STATUS,
    entries: &[
        (1, "Single"),
        (2, "Married"),
        (3, "Widower"),
        (4, "Divorced"),
        (5, "Facto Union"),
        (6, "Legally Separated"),
    ],
};

pub const APPLICATION_MODE: Dictionary = Dictionary {
    feature: schema::APPLICATION_MODE,
    entries: &[
        (1, "1st Phase - General Contingent"),
        (2, "Ordinance No. 612/93"),
        (5, "1st Phase - Special Contingent (Azores Island)"),
        (7, "Holders of Other Higher Courses"),
        (10, "Ordinance No. 854-B/99"),
        (15, "International Student (Bachelor)"),
        (16, "1st Phase - Special Contingent (Madeira Island)"),
        (17, "2nd Phase - General Contingent"),
        (18, "3rd Phase - General Contingent"),
        (26, "Ordinance No. 533-A/99, Item b2) (Different Plan)"),
        (27, "Ordinance No. 533-A/99, Item b3 (Other Institution)"),
        (39, "Over 23 Years Old"),
        (42, "Transfer"),
        (43, "Change of Course"),
        (44, "Technological Specialization Diploma Holders"),
        (51, "Change of Institution/Course"),
        (53, "Short Cycle Diploma Holders"),
        (57, "Change of Institution/Course (International)"),
    ],
};

pub const COURSE: Dictionary = Dictionary {
    feature: schema::COURSE,
    entries: &[
        (33, "Biofuel Production Technologies"),
        (171, "Animation and Multimedia Design"),
        (8014, "Social Service (Evening Attendance)"),
        (9003, "Agronomy"),
        (9070, "Communication Design"),
        (9085, "Veterinary Nursing"),
        (9119, "Informatics Engineering"),
        (9130, "Equinculture"),
        (9147, "Management"),
        (9238, "Social Service"),
        (9254, "Tourism"),
        (9500, "Nursing"),
        (9556, "Oral Hygiene"),
        (9670, "Advertising and Marketing Management"),
        (9773, "Journalism and Communication"),
        (9853, "Basic Education"),
        (9991, "Management (Evening Attendance)"),
    ],
};

pub const DAYTIME_EVENING_ATTENDANCE: Dictionary = Dictionary {
    feature: schema::DAYTIME_EVENING_ATTENDANCE,
    entries: &[(1, "Daytime"), (0, "Evening")],
};

pub const PREVIOUS_QUALIFICATION: Dictionary = Dictionary {
    feature: schema::PREVIOUS_QUALIFICATION,
    entries: &[
        (1, "Secondary Education"),
        (2, "Higher Education - Bachelor's Degree"),
        (3, "Higher Education - Degree"),
        (4, "Higher Education - Master's"),
        (5, "Higher Education - Doctorate"),
        (6, "Frequency of Higher Education"),
        (9, "12th Year of Schooling - Not Completed"),
        (10, "11th Year of Schooling - Not Completed"),
        (12, "Other - 11th Year of Schooling"),
        (14, "10th Year of Schooling"),
        (15, "10th Year of Schooling - Not Completed"),
        (19, "Basic Education 3rd Cycle (9th/10th/11th Year) or Equiv."),
        (38, "Basic Education 2nd Cycle (6th/7th/8th Year) or Equiv."),
        (39, "Technological Specialization Course"),
        (40, "Higher Education - Degree (1st Cycle)"),
        (42, "Professional Higher Technical Course"),
        (43, "Higher Education - Master (2nd Cycle)"),
    ],
};

pub const NACIONALITY: Dictionary = Dictionary {
    feature: schema::NACIONALITY,
    entries: &[
        (1, "Portuguese"),
        (2, "German"),
        (6, "Spanish"),
        (11, "Italian"),
        (13, "Dutch"),
        (14, "English"),
        (17, "Lithuanian"),
        (21, "Angolan"),
        (22, "Cape Verdean"),
        (24, "Guinean"),
        (25, "Mozambican"),
        (26, "Santomean"),
        (32, "Turkish"),
        (41, "Brazilian"),
        (62, "Romanian"),
        (100, "Moldova (Republic of)"),
        (101, "Mexican"),
        (103, "Ukrainian"),
        (105, "Russian"),
        (108, "Cuban"),
        (109, "Colombian"),
    ],
};

pub const MOTHERS_QUALIFICATION: Dictionary = Dictionary {
    feature: schema::MOTHERS_QUALIFICATION,
    entries: &[
        (1, "Secondary Education - 12th Year of Schooling or Eq."),
        (2, "Higher Education - Bachelor's Degree"),
        (3, "Higher Education - Degree"),
        (4, "Higher Education - Master's"),
        (5, "Higher Education - Doctorate"),
        (6, "Frequency of Higher Education"),
        (9, "12th Year of Schooling - Not Completed"),
        (10, "11th Year of Schooling - Not Completed"),
        (11, "7th Year (Old)"),
        (12, "Other - 11th Year of Schooling"),
        (14, "10th Year of Schooling"),
        (18, "General Commerce Course"),
        (19, "Basic Education 3rd Cycle (9th/10th/11th Year) or Equiv."),
        (22, "Technical-Professional Course"),
        (26, "7th Year of Schooling"),
        (27, "2nd Cycle of the General High School Course"),
        (29, "9th Year of Schooling - Not Completed"),
        (30, "8th Year of Schooling"),
        (34, "Unknown"),
        (35, "Can't Read or Write"),
        (36, "Can Read without Having a 4th Year of Schooling"),
        (37, "Basic Education 1st Cycle (4th/5th Year) or Equiv."),
        (38, "Basic Education 2nd Cycle (6th/7th/8th Year) or Equiv."),
        (39, "Technological Specialization Course"),
        (40, "Higher Education - Degree (1st Cycle)"),
        (41, "Specialized Higher Studies Course"),
        (42, "Professional Higher Technical Course"),
        (43, "Higher Education - Master (2nd Cycle)"),
        (44, "Higher Education - Doctorate (3rd Cycle)"),
    ],
};

pub const FATHERS_QUALIFICATION: Dictionary = Dictionary {
    feature: schema::FATHERS_QUALIFICATION,
    entries: &[
        (1, "Secondary Education - 12th Year of Schooling or Eq."),
        (2, "Higher Education - Bachelor's Degree"),
        (3, "Higher Education - Degree"),
        (4, "Higher Education - Master's"),
        (5, "Higher Education - Doctorate"),
        (6, "Frequency of Higher Education"),
        (9, "12th Year of Schooling - Not Completed"),
        (10, "11th Year of Schooling - Not Completed"),
        (11, "7th Year (Old)"),
        (12, "Other - 11th Year of Schooling"),
        (13, "2nd Year Complementary High School Course"),
        (14, "10th Year of Schooling"),
        (18, "General Commerce Course"),
        (19, "Basic Education 3rd Cycle (9th/10th/11th Year) or Equiv."),
        (20, "Complementary High School Course"),
        (22, "Technical-Professional Course"),
        (25, "Complementary High School Course - Not Concluded"),
        (26, "7th Year of Schooling"),
        (27, "2nd Cycle of the General High School Course"),
        (29, "9th Year of Schooling - Not Completed"),
        (30, "8th Year of Schooling"),
        (31, "General Course of Administration and Commerce"),
        (33, "Supplementary Accounting and Administration"),
        (34, "Unknown"),
        (35, "Can't Read or Write"),
        (36, "Can Read without Having a 4th Year of Schooling"),
        (37, "Basic Education 1st Cycle (4th/5th Year) or Equiv."),
        (38, "Basic Education 2nd Cycle (6th/7th/8th Year) or Equiv."),
        (39, "Technological Specialization Course"),
        (40, "Higher Education - Degree (1st Cycle)"),
        (41, "Specialized Higher Studies Course"),
        (42, "Professional Higher Technical Course"),
        (43, "Higher Education - Master (2nd Cycle)"),
        (44, "Higher Education - Doctorate (3rd Cycle)"),
    ],
};

pub const MOTHERS_OCCUPATION: Dictionary = Dictionary {
    feature: schema::MOTHERS_OCCUPATION,
    entries: &[
        (0, "Student"),
        (1, "Representatives of the Legislative Power and Executive Bodies, Directors, Directors and Executive Managers"),
        (2, "Specialists in Intellectual and Scientific Activities"),
        (3, "Intermediate Level Technicians and Professions"),
        (4, "Administrative Staff"),
        (5, "Personal Services, Security and Safety Workers and Sellers"),
        (6, "Farmers and Skilled Workers in Agriculture, Fisheries and Forestry"),
        (7, "Skilled Workers in Industry, Construction and Craftsmen"),
        (8, "Installation and Machine Operators and Assembly Workers"),
        (9, "Unskilled Workers"),
        (10, "Armed Forces Professions"),
        (90, "Other Situation"),
        (99, "(blank)"),
        (122, "Health Professionals"),
        (123, "Teachers"),
        (125, "Specialists in Information and Communication Technologies (ICT)"),
        (131, "Intermediate Level Science and Engineering Technicians and Professions"),
        (132, "Technicians and Professionals, of Intermediate Level of Health"),
        (134, "Intermediate Level Technicians from Legal, Social, Sports, Cultural and Similar Services"),
        (141, "Office Workers, Secretaries in General and Data Processing Operators"),
        (143, "Data, Accounting, Statistical, Financial Services and Registry-Related Operators"),
        (144, "Other Administrative Support Staff"),
        (151, "Personal Service Workers"),
        (152, "Sellers"),
        (153, "Personal Care Workers and the Like"),
        (171, "Skilled Construction Workers and the Like, Except Electricians"),
        (173, "Skilled Workers in Printing, Precision Instrument Manufacturing, Jewelers, Artisans and the Like"),
        (175, "Workers in Food Processing, Woodworking, Clothing and Other Industries and Crafts"),
        (191, "Cleaning Workers"),
        (192, "Unskilled Workers in Agriculture, Animal Production, Fisheries and Forestry"),
        (193, "Unskilled Workers in Extractive Industry, Construction, Manufacturing and Transport"),
        (194, "Meal Preparation Assistants"),
    ],
};

pub const FATHERS_OCCUPATION: Dictionary = Dictionary {
    feature: schema::FATHERS_OCCUPATION,
    entries: &[
        (0, "Student"),
        (1, "Representatives of the Legislative Power and Executive Bodies, Directors, Directors and Executive Managers"),
        (2, "Specialists in Intellectual and Scientific Activities"),
        (3, "Intermediate Level Technicians and Professions"),
        (4, "Administrative Staff"),
        (5, "Personal Services, Security and Safety Workers and Sellers"),
        (6, "Farmers and Skilled Workers in Agriculture, Fisheries and Forestry"),
        (7, "Skilled Workers in Industry, Construction and Craftsmen"),
        (8, "Installation and Machine Operators and Assembly Workers"),
        (9, "Unskilled Workers"),
        (10, "Armed Forces Professions"),
        (90, "Other Situation"),
        (99, "(blank)"),
        (101, "Armed Forces Officers"),
        (102, "Armed Forces Sergeants"),
        (103, "Other Armed Forces Personnel"),
        (112, "Directors of Administrative and Commercial Services"),
        (114, "Hotel, Catering, Trade and Other Services Directors"),
        (121, "Specialists in the Physical Sciences, Mathematics, Engineering and Related Techniques"),
        (122, "Health Professionals"),
        (123, "Teachers"),
        (124, "Specialists in Finance, Accounting, Administrative Organization, Public and Commercial Relations"),
        (131, "Intermediate Level Science and Engineering Technicians and Professions"),
        (132, "Technicians and Professionals, of Intermediate Level of Health"),
        (134, "Intermediate Level Technicians from Legal, Social, Sports, Cultural and Similar Services"),
        (135, "Information and Communication Technology Technicians"),
        (141, "Office Workers, Secretaries in General and Data Processing Operators"),
        (143, "Data, Accounting, Statistical, Financial Services and Registry-Related Operators"),
        (144, "Other Administrative Support Staff"),
        (151, "Personal Service Workers"),
        (152, "Sellers"),
        (153, "Personal Care Workers and the Like"),
        (154, "Protection and Security Services Personnel"),
        (161, "Market-Oriented Farmers and Skilled Agricultural and Animal Production Workers"),
        (163, "Farmers, Livestock Keepers, Fishermen, Hunters and Gatherers, Subsistence"),
        (171, "Skilled Construction Workers and the Like, Except Electricians"),
        (172, "Skilled Workers in Metallurgy, Metalworking and Similar"),
        (174, "Skilled Workers in Electricity and Electronics"),
        (175, "Workers in Food Processing, Woodworking, Clothing and Other Industries and Crafts"),
        (181, "Fixed Plant and Machine Operators"),
        (182, "Assembly Workers"),
        (183, "Vehicle Drivers and Mobile Equipment Operators"),
        (192, "Unskilled Workers in Agriculture, Animal Production, Fisheries and Forestry"),
        (193, "Unskilled Workers in Extractive Industry, Construction, Manufacturing and Transport"),
        (194, "Meal Preparation Assistants"),
        (195, "Street Vendors (Except Food) and Street Service Providers"),
    ],
};

pub const DISPLACED: Dictionary = Dictionary {
    feature: schema::DISPLACED,
    entries: &[(0, "No"), (1, "Yes")],
};

pub const EDUCATIONAL_SPECIAL_NEEDS: Dictionary = Dictionary {
    feature: schema::EDUCATIONAL_SPECIAL_NEEDS,
    entries: &[(0, "No"), (1, "Yes")],
};

pub const DEBTOR: Dictionary = Dictionary {
    feature: schema::DEBTOR,
    entries: &[(0, "No"), (1, "Yes")],
};

pub const TUITION_FEES_UP_TO_DATE: Dictionary = Dictionary {
    feature: schema::TUITION_FEES_UP_TO_DATE,
    entries: &[(0, "No"), (1, "Yes")],
};

pub const GENDER: Dictionary = Dictionary {
    feature: schema::GENDER,
    entries: &[(0, "Female"), (1, "Male")],
};

pub const SCHOLARSHIP_HOLDER: Dictionary = Dictionary {
    feature: schema::SCHOLARSHIP_HOLDER,
    entries: &[(0, "No"), (1, "Yes")],
};

pub const INTERNATIONAL: Dictionary = Dictionary {
    feature: schema::INTERNATIONAL,
    entries: &[(0, "No"), (1, "Yes")],
};

/// Every categorical dictionary, for feature-name driven lookups.
pub const ALL: &[&Dictionary] = &[
    &MARITAL_STATUS,
    &APPLICATION_MODE,
    &COURSE,
    &DAYTIME_EVENING_ATTENDANCE,
    &PREVIOUS_QUALIFICATION,
    &NACIONALITY,
    &MOTHERS_QUALIFICATION,
    &FATHERS_QUALIFICATION,
    &MOTHERS_OCCUPATION,
    &FATHERS_OCCUPATION,
    &DISPLACED,
    &EDUCATIONAL_SPECIAL_NEEDS,
    &DEBTOR,
    &TUITION_FEES_UP_TO_DATE,
    &GENDER,
    &SCHOLARSHIP_HOLDER,
    &INTERNATIONAL,
];

/// The dictionary for a schema feature, if that feature is categorical.
pub fn for_feature(feature: &str) -> Option<&'static Dictionary> {
    ALL.iter().find(|d| d.feature == feature).copied()
}
