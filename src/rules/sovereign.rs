//! Claims on sovereigns and central banks.

use super::{Resolution, Rule, RuleContext};
use crate::core::exposure::Exposure;
use crate::core::weight::RiskWeight;

/// Supranational institutions weighted 0% in any currency: (label, name
/// tokens, full names).
const SUPRANATIONALS: [(&str, &[&str], &[&str]); 4] = [
    (
        "BIS",
        &["bis", "bri"],
        &[
            "bank for international settlements",
            "banque des règlements internationaux",
            "banque des reglements internationaux",
        ],
    ),
    (
        "IMF",
        &["imf", "fmi"],
        &["international monetary fund", "fonds monétaire international", "fonds monetaire international"],
    ),
    (
        "ECB",
        &["ecb", "bce"],
        &["european central bank", "banque centrale européenne", "banque centrale europeenne"],
    ),
    (
        "European Commission",
        &[],
        &["european commission", "commission européenne", "commission europeenne"],
    ),
];

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
}

/// Sub-segment names the Moroccan state or Bank Al-Maghrib.
///
/// `maroc`, `morocc` and `maghrib` match anywhere in the text. `bam` must
/// open a word, so "BAM" and "BAMTreasury" match but "Alabama" does not.
fn names_domestic_sovereign(sub_segment: &str) -> bool {
    let lower = sub_segment.to_lowercase();
    ["maroc", "morocc", "maghrib"]
        .iter()
        .any(|name| lower.contains(name))
        || tokens(&lower).any(|t| t.starts_with("bam"))
}

fn supranational(sub_segment: &str) -> Option<&'static str> {
    let lower = sub_segment.to_lowercase();
    SUPRANATIONALS
        .iter()
        .find(|(_, short, long)| {
            long.iter().any(|name| lower.contains(name))
                || tokens(&lower).any(|t| short.contains(&t))
        })
        .map(|(label, _, _)| *label)
}

pub fn resolve(exposure: &Exposure, ctx: &RuleContext<'_>) -> Resolution {
    let domestic = &ctx.config.domestic_currency;

    if exposure.currency() == domestic && names_domestic_sovereign(exposure.sub_segment()) {
        return Resolution::new(
            RiskWeight::Zero,
            Rule::SovereignDomestic {
                currency: domestic.clone(),
            },
        );
    }

    if let Some(institution) = supranational(exposure.sub_segment()) {
        return Resolution::new(RiskWeight::Zero, Rule::SovereignSupranational { institution });
    }

    if let Some(rating) = exposure.external_rating() {
        return Resolution::new(
            ctx.tables.sovereign.weight(Some(rating.bucket)),
            Rule::SovereignRated {
                code: rating.code.clone(),
                bucket: rating.bucket,
            },
        );
    }

    if let Some(class) = exposure.pmae_class() {
        return Resolution::new(
            ctx.tables.pmae.weight(class),
            Rule::SovereignPmae {
                class: class.value(),
            },
        );
    }

    Resolution::new(ctx.tables.sovereign.unrated(), Rule::SovereignUnrated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::segment::Segment;
    use crate::rules::testing;
    use crate::tables::weights::PmaeClass;
    use rust_decimal_macros::dec;

    fn sovereign(sub_segment: &str, currency: &str) -> crate::core::exposure::ExposureBuilder {
        Exposure::builder(Segment::Sovereign, dec!(1_000_000))
            .sub_segment(sub_segment)
            .currency(currency)
    }

    #[test]
    fn test_domestic_sovereign_ignores_rating() {
        for name in ["Kingdom of Morocco", "BAM", "Etat marocain", "Bank Al-Maghrib"] {
            let e = sovereign(name, "MAD").external_rating("CCC").build();
            let r = testing::resolve(resolve, &e);
            assert_eq!(r.weight, RiskWeight::Zero, "{name}");
            assert!(matches!(r.rule, Rule::SovereignDomestic { .. }));
        }
    }

    #[test]
    fn test_domestic_names_inside_longer_words() {
        for name in ["GovernmentOfMorocco", "EtatduMaroc", "BAMTreasury", "Tresor-BAM"] {
            let e = sovereign(name, "MAD").external_rating("BB").build();
            let r = testing::resolve(resolve, &e);
            assert_eq!(r.weight, RiskWeight::Zero, "{name}");
            assert!(matches!(r.rule, Rule::SovereignDomestic { .. }), "{name}");
        }
    }

    #[test]
    fn test_domestic_requires_local_currency() {
        let e = sovereign("Etat marocain", "USD").external_rating("BBB-").build();
        let r = testing::resolve(resolve, &e);
        assert_eq!(r.weight, RiskWeight::Fifty);
        assert!(matches!(r.rule, Rule::SovereignRated { .. }));
    }

    #[test]
    fn test_bam_is_a_whole_word() {
        // "Alabama" contains "bam" but is not Bank Al-Maghrib.
        let e = sovereign("State of Alabama", "MAD").build();
        assert_eq!(testing::resolve(resolve, &e).rule, Rule::SovereignUnrated);
    }

    #[test]
    fn test_supranationals_any_currency() {
        for (name, label) in [
            ("BIS", "BIS"),
            ("Fonds Monétaire International", "IMF"),
            ("ECB", "ECB"),
            ("European Commission", "European Commission"),
        ] {
            let e = sovereign(name, "EUR").external_rating("BB").build();
            let r = testing::resolve(resolve, &e);
            assert_eq!(r.weight, RiskWeight::Zero);
            assert_eq!(r.rule, Rule::SovereignSupranational { institution: label });
        }
    }

    #[test]
    fn test_rating_scale() {
        let cases = [
            ("AAA", RiskWeight::Zero),
            ("AA-", RiskWeight::Zero),
            ("A+", RiskWeight::Twenty),
            ("A-", RiskWeight::Twenty),
            ("BBB", RiskWeight::Fifty),
            ("BB+", RiskWeight::Hundred),
            ("B-", RiskWeight::Hundred),
            ("CCC", RiskWeight::HundredFifty),
        ];
        for (code, expected) in cases {
            let e = sovereign("France", "EUR").external_rating(code).build();
            assert_eq!(testing::resolve(resolve, &e).weight, expected, "{code}");
        }
    }

    #[test]
    fn test_pmae_fallback() {
        let e = sovereign("Senegal", "XOF")
            .pmae_class(PmaeClass::new(3))
            .build();
        let r = testing::resolve(resolve, &e);
        assert_eq!(r.weight, RiskWeight::Fifty);
        assert_eq!(r.rule, Rule::SovereignPmae { class: 3 });

        let e = sovereign("Senegal", "XOF")
            .pmae_class(PmaeClass::new(7))
            .build();
        assert_eq!(testing::resolve(resolve, &e).weight, RiskWeight::HundredFifty);
    }

    #[test]
    fn test_rating_takes_priority_over_pmae() {
        let e = sovereign("Japan", "JPY")
            .external_rating("A+")
            .pmae_class(PmaeClass::new(0))
            .build();
        assert_eq!(testing::resolve(resolve, &e).weight, RiskWeight::Twenty);
    }

    #[test]
    fn test_unrated_defaults_to_hundred() {
        let e = sovereign("Atlantis", "USD").external_rating("garbled").build();
        let r = testing::resolve(resolve, &e);
        assert_eq!(r.weight, RiskWeight::Hundred);
        assert_eq!(r.rule, Rule::SovereignUnrated);
    }
}
