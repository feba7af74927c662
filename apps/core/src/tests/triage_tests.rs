//! Triage Tests
//!
//! Classification scenarios, the exact confidence ladder at its breakpoints,
//! and normalization stability.

use crate::models::Category;
use crate::triage::{normalize, Classifier};

mod classification_scenarios {
    use super::*;

    #[test]
    fn test_business_email_is_productive() {
        let classifier = Classifier::new();
        let result = classifier
            .classify("Precisamos agendar uma reunião urgente sobre o projeto e o prazo do contrato");

        assert_eq!(result.category, Category::Produtivo);
        assert!(
            result.confidence > 0.7,
            "expected confidence > 0.7, got {}",
            result.confidence
        );
        for expected in ["reunião", "urgente", "projeto", "prazo", "contrato"] {
            assert!(
                result.keywords.iter().any(|k| k == expected),
                "missing keyword '{}' in {:?}",
                expected,
                result.keywords
            );
        }
    }

    #[test]
    fn test_social_email_is_unproductive() {
        let classifier = Classifier::new();
        let result =
            classifier.classify("Feliz aniversário! Desejo muita felicidade e um grande abraço");

        assert_eq!(result.category, Category::Improdutivo);
        assert!(
            result.confidence >= 0.55,
            "expected confidence >= 0.55, got {}",
            result.confidence
        );
    }

    #[test]
    fn test_short_text_exact_default() {
        let classifier = Classifier::new();
        for text in ["", "   ", "oi", "abc"] {
            let result = classifier.classify(text);
            assert_eq!(result.category, Category::Improdutivo);
            assert_eq!(result.confidence, 0.5);
            assert!(result.keywords.is_empty());
        }
    }

    #[test]
    fn test_category_and_confidence_always_well_formed() {
        let classifier = Classifier::new();
        let samples = [
            "bom dia, tudo bem por aí?",
            "erro crítico no sistema, cliente aguardando",
            "convite para a festa de casamento",
            "obrigado pelo suporte com o bug de ontem",
            "aaaaa bbbbb ccccc",
        ];
        for text in samples {
            let result = classifier.classify(text);
            assert!(
                (0.0..=1.0).contains(&result.confidence),
                "confidence {} out of [0,1] for '{}'",
                result.confidence,
                text
            );
        }
    }
}

mod confidence_ladder {
    use super::*;

    // Crafted inputs: "reunião" weighs 2.0, "obrigado" weighs 1.0, and neither
    // contains any other lexicon word as a substring.

    #[test]
    fn test_ratio_exactly_060_falls_in_middle_band() {
        let classifier = Classifier::new();
        // productive 3 * 2.0 = 6.0, unproductive 4 * 1.0 = 4.0 -> ratio 0.6
        let text = "reunião reunião reunião obrigado obrigado obrigado obrigado";

        let score = classifier.score(text);
        assert_eq!(score.ratio(), Some(0.6));

        let result = classifier.classify(text);
        // At exactly 0.6 the top band does not apply: Produtivo at 0.7, not 0.95.
        assert_eq!(result.category, Category::Produtivo);
        assert!(
            (result.confidence - 0.7).abs() < 1e-9,
            "expected 0.7, got {}",
            result.confidence
        );
    }

    #[test]
    fn test_ratio_exactly_040_falls_in_flat_band() {
        let classifier = Classifier::new();
        // productive 2 * 2.0 = 4.0, unproductive 6 * 1.0 = 6.0 -> ratio 0.4
        let text = "reunião reunião obrigado obrigado obrigado obrigado obrigado obrigado";

        let score = classifier.score(text);
        assert_eq!(score.ratio(), Some(0.4));

        let result = classifier.classify(text);
        // The jump: exactly 0.4 is Improdutivo at flat 0.55; just above it
        // would be Produtivo at 0.6. The discontinuity is intended.
        assert_eq!(result.category, Category::Improdutivo);
        assert_eq!(result.confidence, 0.55);
    }

    #[test]
    fn test_ratio_exactly_030_enters_bottom_band() {
        let classifier = Classifier::new();
        // productive 3 * 2.0 = 6.0, unproductive 14 * 1.0 = 14.0 -> ratio 0.3
        let productive = "reunião ".repeat(3);
        let unproductive = "obrigado ".repeat(14);
        let text = format!("{}{}", productive, unproductive);

        let score = classifier.score(&text);
        assert_eq!(score.ratio(), Some(0.3));

        let result = classifier.classify(&text);
        // Bottom band at its boundary: 0.7 + (0.3 - 0.3) * 2 = 0.7, a jump
        // from the 0.55 flat band just above.
        assert_eq!(result.category, Category::Improdutivo);
        assert!(
            (result.confidence - 0.7).abs() < 1e-9,
            "expected 0.7, got {}",
            result.confidence
        );
    }

    #[test]
    fn test_extreme_ratios_cap_at_095() {
        let classifier = Classifier::new();

        let result = classifier.classify("reunião reunião reunião reunião");
        assert_eq!(result.category, Category::Produtivo);
        assert_eq!(result.confidence, 0.95);

        let result = classifier.classify("obrigado obrigado obrigado obrigado");
        assert_eq!(result.category, Category::Improdutivo);
        assert_eq!(result.confidence, 0.95);
    }
}

mod normalization {
    use super::*;

    #[test]
    fn test_normalize_twice_is_stable() {
        let inputs = [
            "Precisamos agendar uma reunião urgente sobre o projeto",
            "Feliz aniversário! Desejo muita felicidade",
            "Tenho uma dúvida sobre o orçamento do contrato",
        ];
        for input in inputs {
            let first = normalize(input);
            let second = normalize(&first.stemmed_text);
            let third = normalize(&second.stemmed_text);
            assert_eq!(
                second.stemmed_text, third.stemmed_text,
                "stemmed text unstable for '{}'",
                input
            );
            assert_eq!(
                second.keywords, third.keywords,
                "keyword list unstable for '{}'",
                input
            );
        }
    }

    #[test]
    fn test_keywords_preserve_first_seen_order() {
        let result = normalize("contrato novo, prazo apertado, contrato antigo");
        assert_eq!(
            result.keywords,
            vec!["contrato".to_string(), "prazo".to_string()]
        );
    }

    #[test]
    fn test_non_letter_noise_ignored() {
        let result = normalize("projeto@empresa.com 123 #urgente!");
        assert!(result.keywords.contains(&"projeto".to_string()));
        assert!(result.keywords.contains(&"urgente".to_string()));
    }
}
