//! Built-in product rules

use crate::model::{Marker, ProductRule, RuleCabin};

struct RuleDef {
    id: &'static str,
    airline_iata: &'static str,
    airline_name: &'static str,
    cabin: RuleCabin,
    aircraft_in: &'static [&'static str],
    product_names: &'static [&'static str],
    notes: &'static str,
    seatmaps_airline_url: &'static str,
    image_url: &'static str,
    require_markers_any: &'static [Marker],
    requires_corroboration: bool,
}

const RULES: &[RuleDef] = &[
    RuleDef {
        id: "LH_ALLEGRIS_J_A359",
        airline_iata: "LH",
        airline_name: "Lufthansa",
        cabin: RuleCabin::Business,
        aircraft_in: &["A350-900", "A359"],
        product_names: &["Allegris"],
        notes: "Allegris Business on select Lufthansa A350-900s. Verify operating aircraft when possible.",
        seatmaps_airline_url: "https://seatmaps.com/airlines/lh-lufthansa/",
        image_url: "/seat-images/lh-allegris-business.jpg",
        require_markers_any: &[Marker::LieFlat],
        requires_corroboration: false,
    },
    RuleDef {
        id: "LH_ALLEGRIS_F_A359",
        airline_iata: "LH",
        airline_name: "Lufthansa",
        cabin: RuleCabin::First,
        aircraft_in: &["A350-900", "A359"],
        product_names: &["Allegris First", "Allegris"],
        notes: "Allegris First on the Allegris A350-900 configuration.",
        seatmaps_airline_url: "https://seatmaps.com/airlines/lh-lufthansa/",
        image_url: "/seat-images/lh-allegris-first.jpg",
        require_markers_any: &[Marker::Suite],
        requires_corroboration: false,
    },
    RuleDef {
        id: "NH_THE_ROOM_77W_J",
        airline_iata: "NH",
        airline_name: "ANA",
        cabin: RuleCabin::Business,
        aircraft_in: &["777-300ER", "B777-300ER", "77W"],
        product_names: &["THE Room", "The Room"],
        notes: "ANA flagship Business seat on select 777-300ER aircraft.",
        seatmaps_airline_url: "https://seatmaps.com/airlines/nh-ana-all-nippon-airways/",
        image_url: "/seat-images/ana-the-room.jpg",
        require_markers_any: &[Marker::LieFlat, Marker::Suite],
        requires_corroboration: false,
    },
    RuleDef {
        id: "QR_QSUITE_A35K_J",
        airline_iata: "QR",
        airline_name: "Qatar Airways",
        cabin: RuleCabin::Business,
        aircraft_in: &["A350-1000", "A35K"],
        product_names: &["Qsuite", "Qsuites"],
        notes: "Qsuite is route/aircraft dependent. Use seat map when possible.",
        seatmaps_airline_url: "https://seatmaps.com/airlines/qr-qatar-airways/",
        image_url: "/seat-images/qatar-qsuite.jpg",
        require_markers_any: &[Marker::Suite],
        requires_corroboration: true,
    },
    RuleDef {
        id: "QR_QSUITE_77W_J",
        airline_iata: "QR",
        airline_name: "Qatar Airways",
        cabin: RuleCabin::Business,
        aircraft_in: &["777-300ER", "77W", "777-200LR"],
        product_names: &["Qsuite", "Qsuites"],
        notes: "Many QR 777s have Qsuite, but not all. Seat map confirmation recommended.",
        seatmaps_airline_url: "https://seatmaps.com/airlines/qr-qatar-airways/",
        image_url: "/seat-images/qatar-qsuite.jpg",
        require_markers_any: &[Marker::Suite],
        requires_corroboration: true,
    },
    RuleDef {
        id: "VS_A339_RETREAT_J",
        airline_iata: "VS",
        airline_name: "Virgin Atlantic",
        cabin: RuleCabin::Business,
        aircraft_in: &["A330-900", "A330-900neo", "A330neo", "A339"],
        product_names: &["Retreat Suite", "Upper Class Suite", "Upper Class"],
        notes: "Retreat Suites are unique to Virgin's A330-900neo Upper Class.",
        seatmaps_airline_url: "https://seatmaps.com/airlines/vs-virgin-atlantic/",
        image_url: "/seat-images/virgin-retreat-suite.jpg",
        require_markers_any: &[Marker::LieFlat],
        requires_corroboration: false,
    },
    RuleDef {
        id: "BA_CLUB_SUITE_J",
        airline_iata: "BA",
        airline_name: "British Airways",
        cabin: RuleCabin::Business,
        aircraft_in: &["A350-1000", "A35K", "777-300ER", "77W", "787-10"],
        product_names: &["Club Suite"],
        notes: "Retrofit-dependent; confirm seat map on the operating aircraft.",
        seatmaps_airline_url: "https://seatmaps.com/airlines/ba-british-airways/",
        image_url: "/seat-images/ba-club-suite.jpg",
        require_markers_any: &[Marker::LieFlat],
        requires_corroboration: true,
    },
    RuleDef {
        id: "UA_POLARIS_J",
        airline_iata: "UA",
        airline_name: "United",
        cabin: RuleCabin::Business,
        aircraft_in: &["787", "777", "767"],
        product_names: &["Polaris"],
        notes: "Polaris branding spans multiple subtypes; hardware can vary.",
        seatmaps_airline_url: "https://seatmaps.com/airlines/ua-united/",
        image_url: "/seat-images/ua-polaris.jpg",
        require_markers_any: &[Marker::LieFlat],
        requires_corroboration: true,
    },
    RuleDef {
        id: "DL_ONE_SUITE_J",
        airline_iata: "DL",
        airline_name: "Delta",
        cabin: RuleCabin::Business,
        aircraft_in: &["A350", "A330-900", "A339"],
        product_names: &["Delta One Suite", "Delta One"],
        notes: "Suite availability depends on aircraft; some routes use older seats.",
        seatmaps_airline_url: "https://seatmaps.com/airlines/dl-delta-air-lines/",
        image_url: "/seat-images/dl-one-suite.jpg",
        require_markers_any: &[Marker::LieFlat, Marker::Suite],
        requires_corroboration: true,
    },
    RuleDef {
        id: "AF_BIZ_SUITE_J",
        airline_iata: "AF",
        airline_name: "Air France",
        cabin: RuleCabin::Business,
        aircraft_in: &["777-300ER", "77W", "A350-900", "A359"],
        product_names: &["Business Suite"],
        notes: "Air France has multiple business products across fleet; confirm aircraft & seat map.",
        seatmaps_airline_url: "https://seatmaps.com/airlines/af-air-france/",
        image_url: "/seat-images/af-business-suite.jpg",
        require_markers_any: &[Marker::LieFlat],
        requires_corroboration: true,
    },
    RuleDef {
        id: "SQ_A380_SUITES_F",
        airline_iata: "SQ",
        airline_name: "Singapore Airlines",
        cabin: RuleCabin::First,
        aircraft_in: &["A380"],
        product_names: &["Suites", "A380 Suites"],
        notes: "Suites are tied to A380 operations; confirm aircraft on the exact flight.",
        seatmaps_airline_url: "https://seatmaps.com/airlines/sq-singapore-airlines/",
        image_url: "/seat-images/sq-a380-suites.jpg",
        require_markers_any: &[Marker::Suite],
        requires_corroboration: false,
    },
    RuleDef {
        id: "EK_NEW_777_J",
        airline_iata: "EK",
        airline_name: "Emirates",
        cabin: RuleCabin::Business,
        aircraft_in: &["777-300ER", "77W"],
        product_names: &["new business", "suite", "1-2-1"],
        notes: "Emirates 777 business varies widely (2-3-2 vs 1-2-1). Seat map is key.",
        seatmaps_airline_url: "https://seatmaps.com/airlines/ek-emirates/",
        image_url: "/seat-images/ek-new-777-business.jpg",
        require_markers_any: &[Marker::LieFlat],
        requires_corroboration: true,
    },
    RuleDef {
        id: "CX_ARIA_SUITE_J",
        airline_iata: "CX",
        airline_name: "Cathay Pacific",
        cabin: RuleCabin::Business,
        aircraft_in: &["777-300ER", "77W"],
        product_names: &["Aria Suite", "Aria"],
        notes: "Retrofit-dependent; confirm operating aircraft & seat map.",
        seatmaps_airline_url: "https://seatmaps.com/airlines/cx-cathay-pacific/",
        image_url: "/seat-images/cx-aria-suite.jpg",
        require_markers_any: &[Marker::LieFlat, Marker::Suite],
        requires_corroboration: true,
    },
    RuleDef {
        id: "JL_A35K_FLAGSHIP_J",
        airline_iata: "JL",
        airline_name: "Japan Airlines",
        cabin: RuleCabin::Business,
        aircraft_in: &["A350-1000", "A35K"],
        product_names: &["A350-1000"],
        notes: "Flagship cabin on A350-1000 operations; confirm aircraft type.",
        seatmaps_airline_url: "https://seatmaps.com/airlines/jl-japan-airlines/",
        image_url: "/seat-images/jl-a35k-business.jpg",
        require_markers_any: &[Marker::LieFlat],
        requires_corroboration: false,
    },
    RuleDef {
        id: "AA_FLAGSHIP_J",
        airline_iata: "AA",
        airline_name: "American Airlines",
        cabin: RuleCabin::Business,
        aircraft_in: &["777", "787", "77W", "789"],
        product_names: &["Flagship", "suite", "lie-flat"],
        notes: "Hardware varies across AA fleet; confirm via seat map for the operating aircraft.",
        seatmaps_airline_url: "https://seatmaps.com/airlines/aa-american-airlines/",
        image_url: "/seat-images/aa-flagship-business.jpg",
        require_markers_any: &[Marker::LieFlat],
        requires_corroboration: true,
    },
];

impl RuleDef {
    fn to_rule(&self) -> ProductRule {
        ProductRule {
            id: self.id.to_string(),
            airline_iata: self.airline_iata.to_string(),
            airline_name: self.airline_name.to_string(),
            cabin: self.cabin,
            aircraft_in: owned(self.aircraft_in),
            product_names: owned(self.product_names),
            notes: optional(self.notes),
            seatmaps_airline_url: optional(self.seatmaps_airline_url),
            image_url: optional(self.image_url),
            require_markers_any: self.require_markers_any.to_vec(),
            requires_corroboration: self.requires_corroboration,
        }
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Built-in rules in authoring order
pub fn builtin_rules() -> Vec<ProductRule> {
    RULES.iter().map(RuleDef::to_rule).collect()
}
