//! Server-rendered HTML pages
//!
//! Presentation only. Forms post JSON to the `/api` routes through a small
//! inline script; nothing on these pages keeps state between requests.

use awaz_core::models::order::{CHECKOUT_COUNTRIES, INDIAN_STATES};
use awaz_core::models::pricing::{format_count, format_usd, MIN_CUSTOM_CREDITS};
use awaz_core::models::twiml::escape_xml as escape;
use awaz_core::models::{Country, OrderDetails, SupportedLanguage};
use awaz_services::{CustomQuote, PackageOffer, ServiceStatus};

use super::landing::{LandingPage, Stat, Step};
use super::legal::LegalDocument;

/// Submits `form[data-endpoint]` as JSON and prints the reply.
/// Checkboxes become booleans and `order.*` fields are nested under `order`.
const FORM_SCRIPT: &str = r#"<script>
document.querySelectorAll('form[data-endpoint]').forEach(function (form) {
  form.addEventListener('submit', async function (event) {
    event.preventDefault();
    var body = {};
    Array.prototype.forEach.call(form.elements, function (el) {
      if (!el.name) return;
      var value = el.type === 'checkbox' ? el.checked : el.value;
      if (el.dataset.number !== undefined) value = Number(value);
      if (el.name.indexOf('order.') === 0) {
        body.order = body.order || {};
        body.order[el.name.slice(6)] = value;
      } else {
        body[el.name] = value;
      }
    });
    var out = form.querySelector('[data-result]');
    out.textContent = 'Sending...';
    try {
      var res = await fetch(form.dataset.endpoint, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(body)
      });
      var data = await res.json();
      out.textContent = data.success === false ? data.error : (data.message || 'Done');
    } catch (err) {
      out.textContent = 'Request failed';
    }
  });
});
</script>"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Awaz.ai</title>
</head>
<body>
<header><nav><a href="/">Awaz.ai</a> <a href="/purchase">Pricing</a> <a href="/test-call">Test Call</a></nav></header>
<main>
{body}
</main>
<footer><a href="/privacy">Privacy Policy</a> <a href="/termsandconditions">Terms and Conditions</a></footer>
{script}
</body>
</html>"#,
        title = escape(title),
        body = body,
        script = FORM_SCRIPT,
    )
}

fn stats(stats: &[Stat]) -> String {
    let items: String = stats
        .iter()
        .map(|s| format!("<li><strong>{}</strong> {}</li>", escape(s.value), escape(s.label)))
        .collect();
    format!(r#"<ul class="stats">{}</ul>"#, items)
}

fn steps(steps: &[Step]) -> String {
    let items: String = steps
        .iter()
        .map(|s| {
            let details = s
                .details
                .map(|d| format!("<p>{}</p>", escape(d)))
                .unwrap_or_default();
            format!(
                "<li><span>{}</span><h3>{}</h3><p>{}</p>{}</li>",
                escape(s.step),
                escape(s.title),
                escape(s.description),
                details
            )
        })
        .collect();
    format!("<ol>{}</ol>", items)
}

fn language_options(selected_code: bool) -> String {
    SupportedLanguage::ALL
        .iter()
        .map(|lang| {
            let value = if selected_code {
                lang.code().to_string()
            } else {
                lang.name().to_lowercase()
            };
            format!(r#"<option value="{}">{}</option>"#, value, lang.name())
        })
        .collect()
}

/// Demo call form on the test-call page, optionally prefilled
fn demo_call_form(phone: &str, name: &str) -> String {
    format!(
        r#"<form data-endpoint="/api/voice/test-call">
<label>Phone number <input name="phoneNumber" type="tel" placeholder="+91 98765 43210" value="{phone}" required></label>
<label>Your name <input name="name" type="text" placeholder="Friend" value="{name}"></label>
<label>Language <select name="language">{languages}</select></label>
<label><input name="useElevenLabs" type="checkbox" checked> Generate the greeting with ElevenLabs</label>
<button type="submit">Call me</button>
<p data-result role="status"></p>
</form>"#,
        phone = escape(phone),
        name = escape(name),
        languages = language_options(true)
    )
}

/// Hero form; hands the number over to the test-call page
fn hero_form() -> String {
    let countries: String = Country::ALL
        .iter()
        .map(|c| {
            format!(
                r#"<option value="{}">{} ({})</option>"#,
                c.code(),
                c.name(),
                c.dial_code()
            )
        })
        .collect();
    format!(
        r#"<form method="get" action="/test-call">
<label>Country <select name="country">{}</select></label>
<label>Phone number <input name="phone" type="tel" placeholder="98765 43210" required></label>
<label>Your name <input name="name" type="text" placeholder="Friend"></label>
<button type="submit">Get a Free Call</button>
</form>"#,
        countries
    )
}

fn package_cards(packages: &[PackageOffer]) -> String {
    packages
        .iter()
        .map(|offer| {
            let package = offer.package;
            let features: String = package
                .features
                .iter()
                .map(|f| format!("<li>{}</li>", escape(f)))
                .collect();
            format!(
                r#"<article class="package{popular}"><h3>{name}</h3><p>{credits} Credits</p><p><strong>{price}</strong> <s>{original}</s></p><p>~{minutes} minutes or ~{messages} messages</p><ul>{features}</ul><a href="{link}">Buy {name}</a></article>"#,
                popular = if package.popular { " popular" } else { "" },
                name = escape(package.name),
                credits = format_count(package.credits),
                price = format_usd(package.price),
                original = escape(package.original_price),
                minutes = format_count(offer.estimate.minutes),
                messages = format_count(offer.estimate.messages),
                features = features,
                link = escape(&offer.checkout_link),
            )
        })
        .collect()
}

/// `/`
pub fn landing(page: &LandingPage) -> String {
    let hero = &page.hero;
    let highlights: String = hero
        .highlights
        .iter()
        .map(|h| format!("<li>{}</li>", escape(h)))
        .collect();

    let features: String = page
        .features
        .features
        .iter()
        .map(|f| format!("<article><h3>{}</h3><p>{}</p></article>", escape(f.title), escape(f.description)))
        .collect();

    let testimonials: String = page
        .testimonials
        .testimonials
        .iter()
        .map(|t| {
            format!(
                "<blockquote><p>{}</p><footer>{}, {}, {}</footer></blockquote>",
                escape(t.quote),
                escape(t.author),
                escape(t.role),
                escape(t.location)
            )
        })
        .collect();

    let how = &page.how_it_works;
    let contact = &page.contact;

    let body = format!(
        r#"<section id="hero">
<p>{badge}</p>
<h1>{headline} <span>{accent}</span></h1>
<p>{subtitle}</p>
<ul>{highlights}</ul>
<h2>{form_heading}</h2>
{demo_form}
{hero_stats}
</section>
<section id="features">
<h2>{features_heading}</h2>
<p>{features_subtitle}</p>
{features}
{feature_stats}
<p>{consent}</p>
</section>
<section id="how-it-works">
<h2>{how_heading}</h2>
<p>{how_subtitle}</p>
{how_steps}
<h2>{launch_heading}</h2>
<p>{launch_subtitle}</p>
{launch_steps}
<p>{trial}</p>
</section>
<section id="pricing">
<h2>{pricing_heading}</h2>
<p>{pricing_subtitle}</p>
{packages}
<p>{pricing_footnote} <a href="/purchase">Custom credits</a></p>
</section>
<section id="testimonials">
<h2>{testimonials_heading}</h2>
<p>{testimonials_subtitle}</p>
{testimonials}
</section>
<section id="contact">
<h2>{contact_heading}</h2>
<p>{contact_subtitle}</p>
<form data-endpoint="/api/contact">
<label>Name <input name="name" required></label>
<label>Business <input name="business" required></label>
<label>Phone <input name="phone" type="tel" required></label>
<label>Message <textarea name="message"></textarea></label>
<label>Preferred language <select name="preferredLanguage">{contact_languages}</select></label>
<label><input name="hasConsent" type="checkbox"> I have consent to message my contacts</label>
<button type="submit">Send</button>
<p data-result role="status"></p>
</form>
<p>{privacy_note}</p>
</section>"#,
        badge = escape(hero.badge),
        headline = escape(hero.headline),
        accent = escape(hero.headline_accent),
        subtitle = escape(hero.subtitle),
        highlights = highlights,
        form_heading = escape(hero.form_heading),
        demo_form = hero_form(),
        hero_stats = stats(hero.stats),
        features_heading = escape(page.features.heading),
        features_subtitle = escape(page.features.subtitle),
        features = features,
        feature_stats = stats(page.features.stats),
        consent = escape(page.features.consent_note),
        how_heading = escape(how.heading),
        how_subtitle = escape(how.subtitle),
        how_steps = steps(how.steps),
        launch_heading = escape(how.launch_heading),
        launch_subtitle = escape(how.launch_subtitle),
        launch_steps = steps(how.launch_steps),
        trial = escape(how.trial_note),
        pricing_heading = escape(page.pricing.heading),
        pricing_subtitle = escape(page.pricing.subtitle),
        packages = package_cards(&page.pricing.packages),
        pricing_footnote = escape(page.pricing.footnote),
        testimonials_heading = escape(page.testimonials.heading),
        testimonials_subtitle = escape(page.testimonials.subtitle),
        testimonials = testimonials,
        contact_heading = escape(contact.heading),
        contact_subtitle = escape(contact.subtitle),
        contact_languages = language_options(false),
        privacy_note = escape(contact.privacy_note),
    );

    layout("AI Voice Outreach", &body)
}

/// `/privacy` and `/termsandconditions`
pub fn legal(document: &LegalDocument) -> String {
    let sections: String = document
        .sections
        .iter()
        .map(|section| {
            let paragraphs: String = section
                .paragraphs
                .iter()
                .map(|p| format!("<p>{}</p>", escape(p)))
                .collect();
            let lists: String = section
                .lists
                .iter()
                .map(|list| {
                    let title = list
                        .title
                        .map(|t| format!("<h3>{}</h3>", escape(t)))
                        .unwrap_or_default();
                    let items: String = list
                        .items
                        .iter()
                        .map(|i| format!("<li>{}</li>", escape(i)))
                        .collect();
                    format!("{}<ul>{}</ul>", title, items)
                })
                .collect();
            format!(
                "<section><h2>{}</h2>{}{}</section>",
                escape(section.heading),
                paragraphs,
                lists
            )
        })
        .collect();

    let body = format!(
        "<article><h1>{}</h1><p>Last updated: {}</p>{}</article>",
        escape(document.title),
        escape(document.last_updated),
        sections
    );
    layout(document.title, &body)
}

/// Outcome of the custom credit calculator
pub enum QuoteState {
    Empty,
    Quoted(CustomQuote),
    Rejected { credits: String, error: String },
}

/// `/purchase`
pub fn purchase(packages: &[PackageOffer], quote: &QuoteState) -> String {
    let (credits_value, result) = match quote {
        QuoteState::Empty => (String::new(), String::new()),
        QuoteState::Quoted(q) => (
            q.order.credits.to_string(),
            format!(
                r#"<p><strong>{total}</strong> for {credits} credits ({rate} per credit), ~{minutes} minutes or ~{messages} messages</p><a href="{link}">Continue to checkout</a>"#,
                total = escape(&q.summary.total_display),
                credits = format_count(q.order.credits),
                rate = format_usd(q.summary.price_per_credit),
                minutes = format_count(q.summary.estimate.minutes),
                messages = format_count(q.summary.estimate.messages),
                link = escape(&q.checkout_link),
            ),
        ),
        QuoteState::Rejected { credits, error } => {
            (escape(credits), format!(r#"<p role="alert">{}</p>"#, escape(error)))
        }
    };

    let body = format!(
        r#"<h1>Choose Your Credits</h1>
<section id="packages">{packages}</section>
<section id="custom">
<h2>Custom Amount</h2>
<form method="get" action="/purchase">
<label>Credits <input name="credits" type="number" min="{min}" step="1" value="{credits_value}"></label>
<button type="submit">Calculate</button>
</form>
{result}
</section>"#,
        packages = package_cards(packages),
        min = MIN_CUSTOM_CREDITS,
        credits_value = credits_value,
        result = result,
    );
    layout("Purchase Credits", &body)
}

/// `/checkout`; "Invalid Order" when the query carries no order
pub fn checkout(order: Option<&OrderDetails>) -> String {
    let Some(order) = order else {
        let body = r#"<h1>Invalid Order</h1><p><a href="/purchase">Back to pricing</a></p>"#;
        return layout("Invalid Order", body);
    };

    let summary = order.summary();
    let countries: String = CHECKOUT_COUNTRIES
        .iter()
        .map(|(code, name)| format!(r#"<option value="{}">{}</option>"#, code, name))
        .collect();
    let states: String = INDIAN_STATES
        .iter()
        .map(|s| format!(r#"<option value="{0}">{0}</option>"#, escape(s)))
        .collect();

    let body = format!(
        r#"<h1>Checkout</h1>
<aside>
<h2>Order Summary</h2>
<p>{credits} credits</p>
<p>~{minutes} minutes or ~{messages} messages</p>
<p>{rate} per credit</p>
<p>Total: <strong>{total}</strong></p>
</aside>
<form data-endpoint="/api/checkout">
<input type="hidden" name="order.orderType" value="{order_type}">
<input type="hidden" name="order.packageId" value="{package_id}">
<input type="hidden" name="order.credits" value="{order_credits}" data-number>
<input type="hidden" name="order.price" value="{order_price}">
<label>Email <input name="email" type="email" required></label>
<label>First name <input name="firstName" required></label>
<label>Last name <input name="lastName" required></label>
<label>Company <input name="company"></label>
<label>Phone <input name="phone" type="tel" required></label>
<label>Address <input name="address" required></label>
<label>City <input name="city" required></label>
<label>Postal code <input name="postalCode" required></label>
<label>Country <select name="country">{countries}</select></label>
<label>State <select name="state">{states}</select></label>
<label><input name="agreeTerms" type="checkbox"> I agree to the <a href="/termsandconditions">Terms of Service</a> and <a href="/privacy">Privacy Policy</a></label>
<label><input name="agreeMarketing" type="checkbox"> Send me product updates</label>
<button type="submit">Complete Purchase</button>
<p data-result role="status"></p>
</form>"#,
        credits = format_count(summary.credits),
        minutes = format_count(summary.estimate.minutes),
        messages = format_count(summary.estimate.messages),
        rate = format_usd(summary.price_per_credit),
        total = escape(&summary.total_display),
        order_type = order.order_type.as_str(),
        package_id = escape(&order.package_id),
        order_credits = order.credits,
        order_price = order.price.normalize(),
        countries = countries,
        states = states,
    );
    layout("Checkout", &body)
}

/// `/test-call`, prefilled from the hero form when it sent a number
pub fn test_call(status: &ServiceStatus, phone: Option<&str>, name: Option<&str>) -> String {
    let vendor = |name: &str, configured: bool, state: &str| {
        format!(
            "<li>{}: {} ({})</li>",
            name,
            if configured { "configured" } else { "not configured" },
            escape(state)
        )
    };
    let services = &status.services;

    let body = format!(
        r#"<h1>Test Voice Call</h1>
<ul>{elevenlabs}{twilio}</ul>
<p>{ready}</p>
{form}"#,
        elevenlabs = vendor("ElevenLabs", services.elevenlabs.configured, services.elevenlabs.status),
        twilio = vendor("Twilio", services.twilio.configured, services.twilio.status),
        ready = if status.ready {
            "All services are ready."
        } else {
            "Some services are not configured; calls may fail."
        },
        form = demo_call_form(phone.unwrap_or_default(), name.unwrap_or_default()),
    );
    layout("Test Call", &body)
}
