//! Landing page content
//!
//! The landing page is a stack of independent sections. Their copy lives
//! here so the HTML page and `GET /api/site/landing` serve the same text.

use awaz_core::models::SupportedLanguage;
use awaz_services::PackageOffer;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub badge: &'static str,
    pub headline: &'static str,
    pub headline_accent: &'static str,
    pub subtitle: &'static str,
    pub highlights: &'static [&'static str],
    pub form_heading: &'static str,
    pub stats: &'static [Stat],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesSection {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub features: &'static [Feature],
    pub stats: &'static [Stat],
    pub consent_note: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HowItWorksSection {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub steps: &'static [Step],
    pub launch_heading: &'static str,
    pub launch_subtitle: &'static str,
    pub launch_steps: &'static [Step],
    pub trial_note: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub rating: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestimonialsSection {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub testimonials: &'static [Testimonial],
}

#[derive(Debug, Clone, Serialize)]
pub struct PricingSection {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub packages: Vec<PackageOffer>,
    pub footnote: &'static str,
}

/// Contact form language choice; the value is the lowercase name
#[derive(Debug, Clone, Serialize)]
pub struct LanguageOption {
    pub value: String,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSection {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub languages: Vec<LanguageOption>,
    pub privacy_note: &'static str,
}

/// Every landing section, top to bottom
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub hero: Hero,
    pub features: FeaturesSection,
    pub how_it_works: HowItWorksSection,
    pub pricing: PricingSection,
    pub testimonials: TestimonialsSection,
    pub contact: ContactSection,
}

impl LandingPage {
    /// Assemble the page around the current package offers
    pub fn new(packages: Vec<PackageOffer>) -> Self {
        Self {
            hero: hero(),
            features: features(),
            how_it_works: how_it_works(),
            pricing: PricingSection {
                heading: "Simple Credit System",
                subtitle: "Pay only for what you use. Mix voice calls and messages as needed.",
                packages,
                footnote: "Need more credits? Contact us for custom packages.",
            },
            testimonials: TestimonialsSection {
                heading: "Real Results from Real Businesses",
                subtitle: "See how local businesses across India & Nepal are growing with AI voice outreach.",
                testimonials: &TESTIMONIALS,
            },
            contact: ContactSection {
                heading: "Get Started",
                subtitle: "Ready to transform your business communication? Let's talk.",
                languages: SupportedLanguage::ALL
                    .iter()
                    .map(|lang| LanguageOption {
                        value: lang.name().to_lowercase(),
                        label: lang.name(),
                    })
                    .collect(),
                privacy_note: "We will only use your contact for campaign setup and follow-up. By submitting you consent to receive a response.",
            },
        }
    }
}

fn hero() -> Hero {
    Hero {
        badge: "AI Voice Outreach for Local Businesses",
        headline: "Smart Outreach",
        headline_accent: "Built for India",
        subtitle: "Create personalized voice sequences, SMS campaigns & automated reminders in local languages, fast, affordable, and fully automated.",
        highlights: &[
            "10+ Local Languages",
            "AI-Powered Personalization",
            "No Coding Required",
        ],
        form_heading: "Try a Free Voice Call",
        stats: &[
            Stat { value: "50K+", label: "Calls Delivered" },
            Stat { value: "10", label: "Languages" },
            Stat { value: "95%", label: "Success Rate" },
        ],
    }
}

fn features() -> FeaturesSection {
    FeaturesSection {
        heading: "Features That Transform Communication",
        subtitle: "Experience the power of AI-driven voice technology designed specifically for Indian businesses and their unique communication needs.",
        features: &FEATURES,
        stats: &[
            Stat { value: "99.9%", label: "Uptime" },
            Stat { value: "50K+", label: "Customers" },
            Stat { value: "1M+", label: "Calls Delivered" },
            Stat { value: "95%", label: "Success Rate" },
        ],
        consent_note: "All outreach requires explicit consent, built-in opt-out functionality.",
    }
}

fn how_it_works() -> HowItWorksSection {
    HowItWorksSection {
        heading: "How Awaz.ai Works",
        subtitle: "From upload to delivery in minutes. Transform how you communicate with customers using the power of AI voice technology.",
        steps: &STEPS,
        launch_heading: "Launch Your First Outreach Sequence",
        launch_subtitle: "From contact upload to live delivery in under 10 minutes",
        launch_steps: &LAUNCH_STEPS,
        trial_note: "Free trial includes 100 credits • No setup fees • Cancel anytime",
    }
}

static FEATURES: [Feature; 6] = [
    Feature {
        title: "AI-Powered Voices",
        description: "Crystal-clear, natural-sounding voices powered by ElevenLabs. Indistinguishable from human speech.",
    },
    Feature {
        title: "10+ Indian Languages",
        description: "Speak to customers in their native language - Hindi, Bengali, Tamil, Telugu, Marathi, and more.",
    },
    Feature {
        title: "Instant Delivery",
        description: "Reach thousands of customers in minutes. No waiting, no delays - just instant voice communication.",
    },
    Feature {
        title: "Smart Personalization",
        description: "Dynamic variables like {{name}}, {{amount}}, {{date}} make every call feel personal and relevant.",
    },
    Feature {
        title: "Real-Time Analytics",
        description: "Track delivery rates, call duration, and customer engagement with detailed insights and reports.",
    },
    Feature {
        title: "Compliance Ready",
        description: "Built-in DLT registration, opt-out handling, and TRAI compliance for worry-free campaigns.",
    },
];

static STEPS: [Step; 4] = [
    Step {
        step: "01",
        title: "Upload Your Contacts",
        description: "Import your customer list via CSV, Excel, or connect directly to Google Sheets. No technical skills required.",
        details: None,
    },
    Step {
        step: "02",
        title: "Create Your Message",
        description: "Write a simple script with personalization like {{name}} and {{amount}}. Choose from pre-made templates or create your own.",
        details: None,
    },
    Step {
        step: "03",
        title: "Select Voice & Language",
        description: "Choose from 10+ Indian languages with crystal-clear AI voices. Perfect pronunciation in Hindi, Tamil, Bengali and more.",
        details: None,
    },
    Step {
        step: "04",
        title: "Launch Your Campaign",
        description: "Hit send and watch as hundreds of personalized calls are delivered instantly. Real-time tracking shows every call status.",
        details: None,
    },
];

static LAUNCH_STEPS: [Step; 3] = [
    Step {
        step: "1",
        title: "Prepare your audience",
        description: "Upload contacts from CSV or connect your CRM (Google Sheets / Zapier).",
        details: Some("Import customer data with names, numbers, and context for personalized outreach sequences."),
    },
    Step {
        step: "2",
        title: "Create your sequence",
        description: "Use templates or write your own script; select language & voice.",
        details: Some("Design voice messages, SMS, and follow-up workflows that feel natural and personal."),
    },
    Step {
        step: "3",
        title: "Launch & track",
        description: "Schedule your outreach sequence, track delivery and engagement in real time.",
        details: Some("Monitor performance, response rates, and optimize your sequences for better results."),
    },
];

static TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        quote: "Our payment collection improved by 40% after using voice reminders in Hindi. Customers appreciate the personal touch!",
        author: "Priya Sharma",
        role: "Kirana Shop Owner",
        location: "Mumbai",
        rating: 5,
    },
    Testimonial {
        quote: "Appointment no-shows dropped significantly. The automated Marathi reminders work perfectly for our local patients.",
        author: "Dr. Ramesh Kumar",
        role: "Clinic Manager",
        location: "Pune",
        rating: 5,
    },
    Testimonial {
        quote: "Festival promotions in Bengali brought 3x more customers. The voice quality is amazing - sounds completely natural!",
        author: "Asha Patel",
        role: "Boutique Owner",
        location: "Kolkata",
        rating: 5,
    },
    Testimonial {
        quote: "Credit reminders in Nepali helped us recover ₹2 lakhs in pending payments. ROI was incredible!",
        author: "Bikash Thapa",
        role: "Electronics Store",
        location: "Kathmandu",
        rating: 5,
    },
    Testimonial {
        quote: "The Tamil voice sequences for our delivery updates reduced customer calls by 70%. Saves us so much time!",
        author: "Meera Krishnan",
        role: "Restaurant Owner",
        location: "Chennai",
        rating: 5,
    },
    Testimonial {
        quote: "Wedding booking confirmations in Telugu increased our conversion rate. Customers love the personal touch!",
        author: "Suresh Reddy",
        role: "Event Planner",
        location: "Hyderabad",
        rating: 5,
    },
];
