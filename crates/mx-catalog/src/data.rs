// Embedded catalog data
//
// Hand-maintained snapshot of the listed offerings. Declaration order here is
// the catalog order every view starts from.

use crate::types::{CatalogMetadata, Listing};

pub(crate) const LISTINGS: &[Listing] = &[
    Listing {
        name: "GPT-3",
        price_per_token: 0.06,
        link: "https://example.com/gpt-3",
        intelligence: 95.0,
        latency_ms: 150.0,
    },
    Listing {
        name: "BERT",
        price_per_token: 0.04,
        link: "https://example.com/bert",
        intelligence: 85.0,
        latency_ms: 100.0,
    },
    Listing {
        name: "T5",
        price_per_token: 0.05,
        link: "https://example.com/t5",
        intelligence: 90.0,
        latency_ms: 120.0,
    },
    Listing {
        name: "GPT-2",
        price_per_token: 0.03,
        link: "https://example.com/gpt-2",
        intelligence: 80.0,
        latency_ms: 80.0,
    },
    Listing {
        name: "XLNet",
        price_per_token: 0.07,
        link: "https://example.com/xlnet",
        intelligence: 92.0,
        latency_ms: 160.0,
    },
    Listing {
        name: "RoBERTa",
        price_per_token: 0.045,
        link: "https://example.com/roberta",
        intelligence: 88.0,
        latency_ms: 110.0,
    },
    Listing {
        name: "ALBERT",
        price_per_token: 0.035,
        link: "https://example.com/albert",
        intelligence: 82.0,
        latency_ms: 90.0,
    },
    Listing {
        name: "DistilBERT",
        price_per_token: 0.025,
        link: "https://example.com/distilbert",
        intelligence: 75.0,
        latency_ms: 70.0,
    },
    Listing {
        name: "Electra",
        price_per_token: 0.055,
        link: "https://example.com/electra",
        intelligence: 87.0,
        latency_ms: 130.0,
    },
    Listing {
        name: "GPT-Neo",
        price_per_token: 0.065,
        link: "https://example.com/gpt-neo",
        intelligence: 93.0,
        latency_ms: 170.0,
    },
];

pub(crate) const METADATA: CatalogMetadata = CatalogMetadata {
    fetch_timestamp: 1_767_225_600,
    source: "curated",
    total_listings: LISTINGS.len(),
};
