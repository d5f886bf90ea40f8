//! # Views
//!
//! Plain-text renderings of the directory's pages. Every function takes
//! the language explicitly and returns a `String`, so the shell decides
//! where output goes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ MyListing   Início · Explorar · Painel · Anunciar   [PT] EN   Carrinho (2)
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │ ✦ Dica Inteligente IA: Pensando...                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Write;

use mylisting_assist::SuggestionState;
use mylisting_core::{translate, Language, Listing, PlanTier, SubmittedListing, TextKey, WizardStep};

use crate::commands::cart::CartResponse;
use crate::commands::wizard::WizardView;

const BRAND: &str = "MyListing";

/// Navigation bar with the language switcher and the cart badge.
pub fn header(language: Language, cart_count: i64) -> String {
    let t = |key| translate(language, key);

    let switcher: Vec<String> = Language::ALL
        .iter()
        .map(|lang| {
            if *lang == language {
                format!("[{}]", lang.short_label())
            } else {
                lang.short_label().to_string()
            }
        })
        .collect();

    format!(
        "{}   {} · {} · {} · {}   {}   {} ({})",
        BRAND,
        t(TextKey::Home),
        t(TextKey::Explore),
        t(TextKey::Dashboard),
        t(TextKey::AddListing),
        switcher.join(" "),
        t(TextKey::Cart),
        cart_count
    )
}

pub fn footer(language: Language) -> String {
    let t = |key| translate(language, key);

    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", BRAND, t(TextKey::FooterDesc));
    let _ = writeln!(
        out,
        "{}: {} · {} · {}",
        t(TextKey::Platform),
        t(TextKey::ExploreMaps),
        t(TextKey::AddBusiness),
        t(TextKey::MemberDash)
    );
    let _ = writeln!(
        out,
        "{}: {} · {} · {}",
        t(TextKey::Support),
        t(TextKey::Docs),
        t(TextKey::Help),
        t(TextKey::Privacy)
    );
    let _ = writeln!(out, "{}: {} [{}]", t(TextKey::Newsletter), t(TextKey::NewsDesc), t(TextKey::Join));
    let _ = write!(out, "{}", t(TextKey::Copyright));
    out
}

/// The suggestion box under the search field. Nothing is shown while idle.
pub fn suggestion(state: &SuggestionState, language: Language) -> Option<String> {
    let title = translate(language, TextKey::AiTitle);

    match state {
        SuggestionState::Idle => None,
        SuggestionState::Pending { .. } => {
            Some(format!("✦ {}: {}", title, translate(language, TextKey::AiLoading)))
        }
        SuggestionState::Resolved { text, .. } => Some(format!("✦ {}: {}", title, text)),
        SuggestionState::Failed { .. } => Some(format!(
            "✦ {}: {} (retry)",
            title,
            translate(language, TextKey::AiFailed)
        )),
    }
}

pub fn cart(cart: &CartResponse, language: Language) -> String {
    let mut out = format!("{} ({})", translate(language, TextKey::Cart), cart.count);

    if cart.items.is_empty() {
        let _ = write!(out, "\n  {}", translate(language, TextKey::CartEmpty));
        return out;
    }

    for item in &cart.items {
        let _ = write!(
            out,
            "\n  {:<24} x{:<4} {:>14}",
            item.name,
            item.quantity,
            item.line_total().format(language)
        );
    }
    let _ = write!(
        out,
        "\n  {:<30} {:>14}",
        translate(language, TextKey::Subtotal),
        cart.subtotal.format(language)
    );
    out
}

pub fn listings(listings: &[Listing], language: Language) -> String {
    if listings.is_empty() {
        return translate(language, TextKey::NoResults).to_string();
    }

    listings
        .iter()
        .map(|l| listing_line(l, language))
        .collect::<Vec<_>>()
        .join("\n")
}

fn listing_line(listing: &Listing, language: Language) -> String {
    let featured = if listing.featured {
        format!(" ★ {}", translate(language, TextKey::Featured))
    } else {
        String::new()
    };

    format!(
        "[{}] {} · {} · {} · {:.1} ({}) · {}{}",
        listing.id,
        listing.title,
        listing.listing_type.label(language),
        listing.location.city,
        listing.rating,
        listing.reviews_count,
        status(listing, language),
        featured
    )
}

fn status(listing: &Listing, language: Language) -> &'static str {
    if listing.is_open() {
        translate(language, TextKey::OpenNow)
    } else {
        translate(language, TextKey::Closed)
    }
}

/// Listing detail page.
pub fn listing_detail(listing: &Listing, language: Language) -> String {
    let mut out = listing_line(listing, language);
    let _ = write!(out, "\n{}", listing.category);
    if let Some(price) = &listing.price_range {
        let _ = write!(out, " · {}", price);
    }
    let _ = write!(out, "\n{}, {}", listing.location.address, listing.location.city);
    let _ = write!(out, "\n\n{}", listing.description);
    if !listing.tags.is_empty() {
        let _ = write!(out, "\n\n#{}", listing.tags.join(" #"));
    }
    out
}

fn step_label(step: WizardStep, language: Language) -> &'static str {
    let key = match step {
        WizardStep::Type => TextKey::StepType,
        WizardStep::Info => TextKey::StepInfo,
        WizardStep::Location => TextKey::StepLocation,
        WizardStep::Plan => TextKey::StepPlan,
    };
    translate(language, key)
}

pub fn wizard(view: &WizardView, language: Language) -> String {
    let steps: Vec<String> = [WizardStep::Type, WizardStep::Info, WizardStep::Location, WizardStep::Plan]
        .iter()
        .map(|s| {
            let label = format!("{} {}", s.number(), step_label(*s, language));
            if *s == view.step {
                format!("[{}]", label)
            } else {
                label
            }
        })
        .collect();

    let mut out = format!("{}\n{}", translate(language, TextKey::WizardTitle), steps.join(" → "));

    let unset = "-";
    let _ = write!(
        out,
        "\n  type: {}\n  title: {}\n  description: {}\n  city: {}\n  plan: {}",
        view.listing_type.map(|t| t.label(language)).unwrap_or(unset),
        or_unset(&view.title),
        or_unset(&view.description),
        or_unset(&view.city),
        view.plan.map(plan_label).unwrap_or(unset),
    );

    let action = if view.step == WizardStep::Plan {
        TextKey::WizardFinish
    } else {
        TextKey::WizardContinue
    };
    let _ = write!(out, "\n  → {}", translate(language, action));
    out
}

pub fn submitted(listing: &SubmittedListing, language: Language) -> String {
    format!(
        "{} [{}] {} ({})",
        translate(language, TextKey::ListingSubmitted),
        listing.id,
        listing.title,
        plan_label(listing.plan)
    )
}

fn plan_label(plan: PlanTier) -> &'static str {
    match plan {
        PlanTier::Free => "Free",
        PlanTier::Gold => "Gold",
    }
}

fn or_unset(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mylisting_core::{CartItem, Money};

    #[test]
    fn test_header_marks_language_and_counts_cart() {
        let pt = header(Language::PtBr, 3);
        assert!(pt.contains("Início · Explorar · Painel · Anunciar"));
        assert!(pt.contains("[PT] EN"));
        assert!(pt.ends_with("Carrinho (3)"));

        let en = header(Language::EnUs, 0);
        assert!(en.contains("PT [EN]"));
        assert!(en.ends_with("Cart (0)"));
    }

    #[test]
    fn test_suggestion_box_states() {
        assert_eq!(suggestion(&SuggestionState::Idle, Language::EnUs), None);

        let pending = SuggestionState::Pending { seq: 1, query: "pizza".into() };
        assert_eq!(
            suggestion(&pending, Language::EnUs).unwrap(),
            "✦ AI Smart Tip: Thinking..."
        );

        let failed = SuggestionState::Failed {
            seq: 2,
            query: "pizza".into(),
            reason: "upstream 500".into(),
        };
        let text = suggestion(&failed, Language::PtBr).unwrap();
        assert!(text.contains("Não foi possível carregar sugestões"));
        assert!(!text.contains("upstream 500"));
    }

    #[test]
    fn test_cart_formats_money_per_language() {
        let response = CartResponse {
            items: vec![CartItem::new("a", "Pastel", Money::from_cents(123_450), 2)],
            count: 2,
            subtotal: Money::from_cents(246_900),
        };

        let pt = cart(&response, Language::PtBr);
        assert!(pt.contains("R$ 2.469,00"));
        assert!(pt.contains("Subtotal do pedido"));

        let en = cart(&response, Language::EnUs);
        assert!(en.contains("$2,469.00"));

        let empty = CartResponse {
            items: Vec::new(),
            count: 0,
            subtotal: Money::zero(),
        };
        assert!(cart(&empty, Language::EnUs).contains("Your cart is empty."));
    }

    #[test]
    fn test_empty_listing_page() {
        assert_eq!(listings(&[], Language::PtBr), "Nenhum anúncio encontrado.");
    }

    #[test]
    fn test_footer_is_translated() {
        let en = footer(Language::EnUs);
        assert!(en.contains("Member Dashboard"));
        assert!(en.ends_with("Made with ❤️ and AI."));
    }
}
