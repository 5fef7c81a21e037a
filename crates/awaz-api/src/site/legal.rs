//! Privacy policy and terms of service text

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LegalSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    /// Bullet list, optionally grouped under a subheading
    pub lists: &'static [BulletList],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BulletList {
    pub title: Option<&'static str>,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalDocument {
    pub title: &'static str,
    pub last_updated: &'static str,
    pub sections: &'static [LegalSection],
}

const fn list(items: &'static [&'static str]) -> BulletList {
    BulletList { title: None, items }
}

pub static PRIVACY_POLICY: LegalDocument = LegalDocument {
    title: "Privacy Policy",
    last_updated: "December 2024",
    sections: &[
        LegalSection {
            heading: "1. Information We Collect",
            paragraphs: &[],
            lists: &[
                BulletList {
                    title: Some("Personal Information"),
                    items: &[
                        "Name and contact information",
                        "Phone numbers and email addresses",
                        "Business information and preferences",
                        "Payment and billing information",
                    ],
                },
                BulletList {
                    title: Some("Usage Information"),
                    items: &[
                        "Call logs and message history",
                        "Service usage statistics",
                        "Device and browser information",
                        "IP addresses and location data",
                    ],
                },
            ],
        },
        LegalSection {
            heading: "2. How We Use Your Information",
            paragraphs: &["We use your information to:"],
            lists: &[list(&[
                "Provide and improve our voice outreach services",
                "Process payments and manage your account",
                "Send service-related communications",
                "Analyze usage patterns and optimize performance",
                "Comply with legal obligations",
            ])],
        },
        LegalSection {
            heading: "3. Information Sharing",
            paragraphs: &[
                "We may share your information with:",
                "We never sell your personal information to third parties.",
            ],
            lists: &[list(&[
                "Service providers who assist in our operations",
                "Payment processors for billing purposes",
                "Legal authorities when required by law",
                "Business partners with your explicit consent",
            ])],
        },
        LegalSection {
            heading: "4. Data Security",
            paragraphs: &["We implement industry-standard security measures to protect your data, including:"],
            lists: &[list(&[
                "Encryption of data in transit and at rest",
                "Regular security audits and monitoring",
                "Access controls and authentication",
                "Secure data centers and infrastructure",
            ])],
        },
        LegalSection {
            heading: "5. Data Retention",
            paragraphs: &["We retain your information for as long as necessary to provide our services and comply with legal obligations. Call logs and message data are typically retained for 12 months unless longer retention is required by law."],
            lists: &[],
        },
        LegalSection {
            heading: "6. Your Rights",
            paragraphs: &["You have the right to:"],
            lists: &[list(&[
                "Access and review your personal information",
                "Correct inaccurate or incomplete data",
                "Delete your account and associated data",
                "Export your data in a portable format",
                "Opt-out of marketing communications",
            ])],
        },
        LegalSection {
            heading: "7. Cookies and Tracking",
            paragraphs: &["We use cookies and similar technologies to improve your experience, analyze usage, and provide personalized content. You can control cookie settings through your browser preferences."],
            lists: &[],
        },
        LegalSection {
            heading: "8. International Data Transfers",
            paragraphs: &["Your data may be processed in countries other than your own. We ensure appropriate safeguards are in place to protect your information in accordance with applicable data protection laws."],
            lists: &[],
        },
        LegalSection {
            heading: "9. Changes to This Policy",
            paragraphs: &["We may update this Privacy Policy from time to time. We will notify you of any material changes by email or through our service."],
            lists: &[],
        },
        LegalSection {
            heading: "10. Contact Us",
            paragraphs: &[
                "If you have any questions about this Privacy Policy or our data practices, please contact us:",
                "Email: privacy@voicereach.ai",
                "Address: Mumbai, Maharashtra, India",
                "Phone: +91-XXXX-XXXX-XX",
            ],
            lists: &[],
        },
    ],
};

pub static TERMS_AND_CONDITIONS: LegalDocument = LegalDocument {
    title: "Terms and Conditions",
    last_updated: "December 2024",
    sections: &[
        LegalSection {
            heading: "1. Acceptance of Terms",
            paragraphs: &["By accessing and using VoiceReach (\"Service\"), you accept and agree to be bound by the terms and provision of this agreement. If you do not agree to abide by the above, please do not use this service."],
            lists: &[],
        },
        LegalSection {
            heading: "2. Service Description",
            paragraphs: &["VoiceReach provides AI-powered voice outreach and messaging services for businesses in India and Nepal. Our service includes voice calls, SMS messaging, and automated communication sequences in multiple local languages."],
            lists: &[],
        },
        LegalSection {
            heading: "3. Credit System and Billing",
            paragraphs: &[],
            lists: &[list(&[
                "Voice calls are charged at $0.01 per minute (₹0.8 per minute)",
                "Messages are charged at $0.004 per message (₹0.3 per message)",
                "Credits are non-refundable and do not expire",
                "All prices are subject to change with 30 days notice",
            ])],
        },
        LegalSection {
            heading: "4. Acceptable Use Policy",
            paragraphs: &["You agree not to use the Service to:"],
            lists: &[list(&[
                "Send spam, unsolicited, or bulk communications",
                "Violate any applicable laws or regulations",
                "Harass, abuse, or harm others",
                "Impersonate any person or entity",
                "Distribute malicious software or content",
            ])],
        },
        LegalSection {
            heading: "5. Data Protection and Privacy",
            paragraphs: &["We are committed to protecting your privacy and personal data. Please refer to our Privacy Policy for detailed information about how we collect, use, and protect your information."],
            lists: &[],
        },
        LegalSection {
            heading: "6. Service Availability",
            paragraphs: &["While we strive for 99.9% uptime, we do not guarantee uninterrupted service. We reserve the right to modify, suspend, or discontinue the service at any time with reasonable notice."],
            lists: &[],
        },
        LegalSection {
            heading: "7. Limitation of Liability",
            paragraphs: &["VoiceReach shall not be liable for any indirect, incidental, special, consequential, or punitive damages, including without limitation, loss of profits, data, use, goodwill, or other intangible losses."],
            lists: &[],
        },
        LegalSection {
            heading: "8. Governing Law",
            paragraphs: &["These terms shall be governed by and construed in accordance with the laws of India, without regard to its conflict of law provisions."],
            lists: &[],
        },
        LegalSection {
            heading: "9. Contact Information",
            paragraphs: &[
                "If you have any questions about these Terms and Conditions, please contact us at:",
                "Email: legal@voicereach.ai",
                "Address: Mumbai, Maharashtra, India",
            ],
            lists: &[],
        },
    ],
};
