use crate::models::scheme::{Eligibility, Scheme};

/// The fixed scheme catalog. Built once at process start and shared
/// read-only for the process lifetime; there is no mutation path and no
/// external source of truth to refresh from.
#[derive(Debug)]
pub struct SchemeCatalog {
    schemes: Vec<Scheme>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn accepts(values: &[&str]) -> Option<Vec<String>> {
    Some(strings(values))
}

impl SchemeCatalog {
    /// Build the catalog. Definition order is significant: eligibility
    /// results and fallback backfill both preserve it.
    pub fn load() -> Self {
        let schemes = vec![
            Scheme {
                id: "scheme_1".to_string(),
                name: "PM Scholarship Scheme".to_string(),
                category: "Education".to_string(),
                description: "Scholarship for students from defense background".to_string(),
                benefits: strings(&[
                    "₹2,500/month for boys",
                    "₹3,000/month for girls",
                    "Valid for professional courses",
                ]),
                documents: strings(&[
                    "Aadhaar Card",
                    "Income Certificate",
                    "Previous Marksheet",
                    "Bank Passbook",
                ]),
                apply_link: "https://scholarships.gov.in".to_string(),
                eligibility: Eligibility {
                    age_min: Some(18),
                    age_max: Some(25),
                    occupation: accepts(&["Student"]),
                    income: accepts(&["Below ₹1,00,000", "₹1,00,000 – ₹3,00,000"]),
                    ..Default::default()
                },
            },
            Scheme {
                id: "scheme_2".to_string(),
                name: "Post Matric Scholarship (SC/ST/OBC)".to_string(),
                category: "Education".to_string(),
                description: "Post-matric scholarship for SC/ST/OBC students".to_string(),
                benefits: strings(&[
                    "Full tuition fee reimbursement",
                    "Monthly maintenance allowance",
                    "Book allowance",
                ]),
                documents: strings(&[
                    "Caste Certificate",
                    "Income Certificate",
                    "Aadhaar",
                    "Fee Receipt",
                ]),
                apply_link: "https://scholarships.gov.in".to_string(),
                eligibility: Eligibility {
                    age_min: Some(16),
                    age_max: Some(30),
                    occupation: accepts(&["Student"]),
                    category: accepts(&["SC", "ST", "OBC"]),
                    income: accepts(&[
                        "Below ₹1,00,000",
                        "₹1,00,000 – ₹3,00,000",
                        "₹3,00,000 – ₹8,00,000",
                    ]),
                    ..Default::default()
                },
            },
            Scheme {
                id: "scheme_3".to_string(),
                name: "PM-KISAN".to_string(),
                category: "Agriculture".to_string(),
                description: "Income support to all farmer families".to_string(),
                benefits: strings(&[
                    "₹6,000 per year in three installments",
                    "Direct benefit transfer to bank",
                ]),
                documents: strings(&["Aadhaar", "Land Records", "Bank Account Details"]),
                apply_link: "https://pmkisan.gov.in".to_string(),
                eligibility: Eligibility {
                    occupation: accepts(&["Farmer"]),
                    has_land: accepts(&["Yes"]),
                    ..Default::default()
                },
            },
            Scheme {
                id: "scheme_4".to_string(),
                name: "Ayushman Bharat (PM-JAY)".to_string(),
                category: "Health".to_string(),
                description: "Health insurance coverage up to ₹5 lakh per family per year"
                    .to_string(),
                benefits: strings(&[
                    "Cashless treatment",
                    "Coverage for secondary and tertiary care",
                    "Free medicines",
                ]),
                documents: strings(&["Aadhaar", "Ration Card", "Income Proof"]),
                apply_link: "https://pmjay.gov.in".to_string(),
                eligibility: Eligibility {
                    income: accepts(&["Below ₹1,00,000", "₹1,00,000 – ₹3,00,000"]),
                    ..Default::default()
                },
            },
            Scheme {
                id: "scheme_5".to_string(),
                name: "Indira Gandhi National Old Age Pension".to_string(),
                category: "Pension".to_string(),
                description: "Monthly pension for senior citizens".to_string(),
                benefits: strings(&[
                    "₹200-500 per month based on age",
                    "Direct bank transfer",
                ]),
                documents: strings(&["Age Proof", "Aadhaar", "Income Certificate"]),
                apply_link: "https://nsap.nic.in".to_string(),
                eligibility: Eligibility {
                    age_min: Some(60),
                    income: accepts(&["Below ₹1,00,000"]),
                    ..Default::default()
                },
            },
            Scheme {
                id: "scheme_6".to_string(),
                name: "PM Matru Vandana Yojana".to_string(),
                category: "Women".to_string(),
                description: "Maternity benefit for pregnant and lactating mothers".to_string(),
                benefits: strings(&[
                    "₹5,000 cash benefit",
                    "Nutritional support",
                    "Health check-ups",
                ]),
                documents: strings(&["Aadhaar", "Pregnancy Certificate", "Bank Details"]),
                apply_link: "https://pmmvy.wcd.gov.in".to_string(),
                eligibility: Eligibility {
                    gender: accepts(&["Female"]),
                    age_min: Some(18),
                    age_max: Some(45),
                    ..Default::default()
                },
            },
            Scheme {
                id: "scheme_7".to_string(),
                name: "MUDRA Loan Scheme".to_string(),
                category: "Employment".to_string(),
                description: "Loans up to ₹10 lakh for small businesses".to_string(),
                benefits: strings(&[
                    "No collateral required",
                    "Low interest rates",
                    "Easy repayment terms",
                ]),
                documents: strings(&["Aadhaar", "Business Plan", "Bank Statement"]),
                apply_link: "https://mudra.org.in".to_string(),
                eligibility: Eligibility {
                    occupation: accepts(&["Self-employed", "Unemployed"]),
                    ..Default::default()
                },
            },
            Scheme {
                id: "scheme_8".to_string(),
                name: "PM Awas Yojana (Urban)".to_string(),
                category: "Housing".to_string(),
                description: "Affordable housing for urban poor".to_string(),
                benefits: strings(&[
                    "Interest subsidy on home loans",
                    "Direct assistance for construction",
                ]),
                documents: strings(&["Aadhaar", "Income Certificate", "Property Documents"]),
                apply_link: "https://pmaymis.gov.in".to_string(),
                eligibility: Eligibility {
                    area: accepts(&["Urban"]),
                    income: accepts(&[
                        "Below ₹1,00,000",
                        "₹1,00,000 – ₹3,00,000",
                        "₹3,00,000 – ₹8,00,000",
                    ]),
                    ..Default::default()
                },
            },
            Scheme {
                id: "scheme_9".to_string(),
                name: "AICTE Pragati Scholarship (Girls)".to_string(),
                category: "Education".to_string(),
                description: "Scholarship for girl students in technical education".to_string(),
                benefits: strings(&["₹50,000 per year", "For diploma/degree courses"]),
                documents: strings(&[
                    "Aadhaar",
                    "Admission Proof",
                    "Income Certificate",
                    "Bank Details",
                ]),
                apply_link: "https://scholarships.gov.in".to_string(),
                eligibility: Eligibility {
                    gender: accepts(&["Female"]),
                    occupation: accepts(&["Student"]),
                    age_min: Some(17),
                    age_max: Some(25),
                    income: accepts(&[
                        "Below ₹1,00,000",
                        "₹1,00,000 – ₹3,00,000",
                        "₹3,00,000 – ₹8,00,000",
                    ]),
                    ..Default::default()
                },
            },
            Scheme {
                id: "scheme_10".to_string(),
                name: "AICTE Saksham Scholarship (Divyang)".to_string(),
                category: "Education".to_string(),
                description: "Scholarship for differently-abled students".to_string(),
                benefits: strings(&[
                    "₹50,000 per year",
                    "For technical courses",
                    "Special support",
                ]),
                documents: strings(&[
                    "Disability Certificate",
                    "Aadhaar",
                    "Income Certificate",
                    "College Admission Proof",
                ]),
                apply_link: "https://scholarships.gov.in".to_string(),
                eligibility: Eligibility {
                    is_disabled: accepts(&["Yes"]),
                    occupation: accepts(&["Student"]),
                    age_min: Some(17),
                    age_max: Some(30),
                    ..Default::default()
                },
            },
        ];

        Self { schemes }
    }

    /// All schemes in definition order.
    pub fn list(&self) -> &[Scheme] {
        &self.schemes
    }

    /// Look up a scheme by id.
    pub fn get(&self, id: &str) -> Option<&Scheme> {
        self.schemes.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}
