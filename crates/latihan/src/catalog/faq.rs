use serde::Serialize;

/// A question/answer pair rendered on the FAQ page and embedded in the
/// FAQPage JSON-LD.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub fn faq_entries() -> &'static [FaqEntry] {
    FAQ
}

const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What is the HRDF levy and who must pay it?",
        answer: "Employers in Malaysia with ten or more local employees must contribute 1% of each employee's monthly wages (basic salary plus fixed allowances) to HRD Corp. The contribution funds the claim pool employers draw on for approved training.",
    },
    FaqEntry {
        question: "How much of a training course can I claim from HRD Corp?",
        answer: "Claimable amounts are capped per scheme. Public programmes are claimable up to RM8,000 per day of training, in-house programmes up to RM12,000 per day, subject to your available levy balance.",
    },
    FaqEntry {
        question: "Do trainees get an allowance when attending claimable training?",
        answer: "Yes. Each scheme carries a daily allowance cap per participant, with additional amounts for meals (RM50) and accommodation (RM150) when they are part of the programme.",
    },
    FaqEntry {
        question: "Is there a fee deducted from HRDF claims?",
        answer: "HRD Corp deducts a 4% service fee from the approved claimable amount, so the net reimbursement is 96% of the total claim.",
    },
    FaqEntry {
        question: "How do I choose an HRDF-approved training provider?",
        answer: "Filter the directory by HRDF approval, your state, and the training category you need. Approved providers are registered with HRD Corp, which is required for your claim to be accepted.",
    },
    FaqEntry {
        question: "How quickly will providers respond to a quote request?",
        answer: "Quote requests are forwarded to matching providers immediately. Most providers respond within one to two business days.",
    },
];
