//! # Internationalization
//!
//! The display language and the translation table.
//!
//! ## Compile-Time Completeness
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  translate(Language, TextKey) is ONE exhaustive match                  │
//! │                                                                         │
//! │     TextKey::Home ──┬── PtBr ──► "Início"                              │
//! │                     └── EnUs ──► "Home"                                │
//! │                                                                         │
//! │  Adding a TextKey without both translations does not compile.          │
//! │  There is no runtime "missing key" path and no silent fallback.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoStaticStr};
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Language
// =============================================================================

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Language {
    /// Brazilian Portuguese. The initial language of a fresh session.
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Language; 2] = [Language::PtBr, Language::EnUs];

    /// BCP 47 tag.
    pub const fn tag(&self) -> &'static str {
        match self {
            Language::PtBr => "pt-BR",
            Language::EnUs => "en-US",
        }
    }

    /// Short label used by the header's language switcher.
    pub const fn short_label(&self) -> &'static str {
        match self {
            Language::PtBr => "PT",
            Language::EnUs => "EN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pt-br" | "pt_br" | "pt" => Ok(Language::PtBr),
            "en-us" | "en_us" | "en" => Ok(Language::EnUs),
            other => Err(CoreError::UnknownLanguage(other.to_string())),
        }
    }
}

// =============================================================================
// Text Keys
// =============================================================================

/// Every translatable string in the directory.
///
/// Iterate with `strum::IntoEnumIterator::iter()`; parse and name with the
/// same camelCase form serde uses (`cartEmpty`, `aiTitle`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, EnumIter, EnumString,
    IntoStaticStr,
)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum TextKey {
    // Header & footer
    Home,
    Explore,
    Dashboard,
    AddListing,
    FooterDesc,
    Platform,
    ExploreMaps,
    AddBusiness,
    MemberDash,
    Support,
    Docs,
    Help,
    Privacy,
    Newsletter,
    NewsDesc,
    Join,
    Copyright,

    // Home hero & search
    HeroTag,
    SearchPlaceholder,
    NearMe,
    ExploreBtn,
    PlanTitle,
    GoldTitle,

    // Search suggestions
    AiTitle,
    AiLoading,
    AiKeyMissing,
    AiDescriptionKeyMissing,
    AiFailed,

    // Cart
    Cart,
    CartEmpty,
    Subtotal,

    // Explore & listing detail
    NoResults,
    OpenNow,
    Closed,
    Featured,
    BookingConfirmed,

    // Add Listing wizard
    WizardTitle,
    StepType,
    StepInfo,
    StepLocation,
    StepPlan,
    WizardContinue,
    WizardFinish,
    ListingSubmitted,
}

impl TextKey {
    /// camelCase key name, as typed in the shell.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

// =============================================================================
// Translation Table
// =============================================================================

/// Looks up the string for `key` in `language`.
pub fn translate(language: Language, key: TextKey) -> &'static str {
    use Language::{EnUs, PtBr};
    use TextKey::*;

    match (key, language) {
        (Home, PtBr) => "Início",
        (Home, EnUs) => "Home",
        (Explore, PtBr) => "Explorar",
        (Explore, EnUs) => "Explore",
        (Dashboard, PtBr) => "Painel",
        (Dashboard, EnUs) => "Dashboard",
        (AddListing, PtBr) => "Anunciar",
        (AddListing, EnUs) => "Add Listing",
        (FooterDesc, PtBr) => {
            "A plataforma definitiva de diretórios. Modular, movida a IA e projetada para crescer."
        }
        (FooterDesc, EnUs) => {
            "The ultimate directory platform. Modular, AI-powered, and designed for growth."
        }
        (Platform, PtBr) => "Plataforma",
        (Platform, EnUs) => "Platform",
        (ExploreMaps, PtBr) => "Explorar Mapas",
        (ExploreMaps, EnUs) => "Explore Maps",
        (AddBusiness, PtBr) => "Adicionar Negócio",
        (AddBusiness, EnUs) => "Add Business",
        (MemberDash, PtBr) => "Painel do Membro",
        (MemberDash, EnUs) => "Member Dashboard",
        (Support, PtBr) => "Suporte",
        (Support, EnUs) => "Support",
        (Docs, PtBr) => "Documentação API",
        (Docs, EnUs) => "API Documentation",
        (Help, PtBr) => "Central de Ajuda",
        (Help, EnUs) => "Help Center",
        (Privacy, PtBr) => "Privacidade e Termos",
        (Privacy, EnUs) => "Privacy & Terms",
        (Newsletter, PtBr) => "Newsletter",
        (Newsletter, EnUs) => "Newsletter",
        (NewsDesc, PtBr) => "Receba as melhores joias locais no seu e-mail.",
        (NewsDesc, EnUs) => "Get the latest local gems delivered to your inbox.",
        (Join, PtBr) => "Participar",
        (Join, EnUs) => "Join",
        (Copyright, PtBr) => "© 2024 MyListing Directory. Feito com ❤️ e IA.",
        (Copyright, EnUs) => "© 2024 MyListing Directory. Made with ❤️ and AI.",

        (HeroTag, PtBr) => "Descubra a Magia Local",
        (HeroTag, EnUs) => "Discover Local Magic",
        (SearchPlaceholder, PtBr) => "Pizza, Café, Academia...",
        (SearchPlaceholder, EnUs) => "Pizza, Coffee, Gym...",
        (NearMe, PtBr) => "Perto de mim",
        (NearMe, EnUs) => "Near me",
        (ExploreBtn, PtBr) => "EXPLORAR",
        (ExploreBtn, EnUs) => "EXPLORE",
        (PlanTitle, PtBr) => "Qual o plano para hoje?",
        (PlanTitle, EnUs) => "What's your plan today?",
        (GoldTitle, PtBr) => "Coleção de Ouro.",
        (GoldTitle, EnUs) => "The Gold Collection.",

        (AiTitle, PtBr) => "Dica Inteligente IA",
        (AiTitle, EnUs) => "AI Smart Tip",
        (AiLoading, PtBr) => "Pensando...",
        (AiLoading, EnUs) => "Thinking...",
        (AiKeyMissing, PtBr) => "Configure uma chave de API para ativar os recursos de IA.",
        (AiKeyMissing, EnUs) => "Please set an API key to enable AI features.",
        (AiDescriptionKeyMissing, PtBr) => "Configure a chave de API para gerar conteúdo.",
        (AiDescriptionKeyMissing, EnUs) => "Set API Key to generate content.",
        (AiFailed, PtBr) => "Não foi possível carregar sugestões. Tente novamente.",
        (AiFailed, EnUs) => "Couldn't load suggestions. Try again.",

        (Cart, PtBr) => "Carrinho",
        (Cart, EnUs) => "Cart",
        (CartEmpty, PtBr) => "Seu carrinho está vazio.",
        (CartEmpty, EnUs) => "Your cart is empty.",
        (Subtotal, PtBr) => "Subtotal do pedido",
        (Subtotal, EnUs) => "Order subtotal",

        (NoResults, PtBr) => "Nenhum anúncio encontrado.",
        (NoResults, EnUs) => "No listings found.",
        (OpenNow, PtBr) => "Aberto agora",
        (OpenNow, EnUs) => "Open now",
        (Closed, PtBr) => "Fechado",
        (Closed, EnUs) => "Closed",
        (Featured, PtBr) => "Destaque",
        (Featured, EnUs) => "Featured",
        (BookingConfirmed, PtBr) => "Reserva confirmada!",
        (BookingConfirmed, EnUs) => "Booking confirmed!",

        (WizardTitle, PtBr) => "Anuncie seu Negócio",
        (WizardTitle, EnUs) => "List your Business",
        (StepType, PtBr) => "Tipo",
        (StepType, EnUs) => "Type",
        (StepInfo, PtBr) => "Informações",
        (StepInfo, EnUs) => "Details",
        (StepLocation, PtBr) => "Localização",
        (StepLocation, EnUs) => "Location",
        (StepPlan, PtBr) => "Plano",
        (StepPlan, EnUs) => "Plan",
        (WizardContinue, PtBr) => "Continuar",
        (WizardContinue, EnUs) => "Continue",
        (WizardFinish, PtBr) => "Concluir",
        (WizardFinish, EnUs) => "Finish",
        (ListingSubmitted, PtBr) => "Anúncio enviado!",
        (ListingSubmitted, EnUs) => "Listing submitted!",
    }
}
