//! Static near-Earth object catalog.
//!
//! Eight well-known NEOs with order-of-magnitude physical and orbital
//! data. Probabilities are illustrative snapshots chosen to exercise all
//! three catalog risk tiers, not live monitoring output.

use super::{ApproachSample, CatalogAsteroid, OrbitElements};

/// All catalog entries, in default display order.
pub static CATALOG: &[CatalogAsteroid] = &[
    APOPHIS,
    BENNU,
    ASTEROID_2023_DW,
    ASTEROID_1950_DA,
    ASTEROID_2002_NT7,
    PHAETHON,
    ASTEROID_2011_AG5,
    EROS,
];

/// 99942 Apophis, the 2029 close-approach headline object.
pub static APOPHIS: CatalogAsteroid = CatalogAsteroid {
    id: "99942",
    name: "99942 Apophis",
    description: "Famous for its exceptionally close 2029 flyby, passing \
                  inside the geostationary ring. Early observations briefly \
                  gave it record impact odds.",
    diameter_m: 370.0,
    velocity_km_s: 12.6,
    mass_display: "6.1e10 kg",
    next_approach: "2029-04-13",
    impact_probability: 0.0027,
    orbit: OrbitElements {
        semi_major_axis_au: 0.922,
        eccentricity: 0.191,
        period_days: 324.0,
    },
    approach_history: &[
        ApproachSample { date: "2013-01-09", distance_million_km: 14.5 },
        ApproachSample { date: "2021-03-06", distance_million_km: 16.9 },
        ApproachSample { date: "2029-04-13", distance_million_km: 0.038 },
        ApproachSample { date: "2036-04-13", distance_million_km: 49.8 },
    ],
};

/// 101955 Bennu, the OSIRIS-REx sample-return target.
pub static BENNU: CatalogAsteroid = CatalogAsteroid {
    id: "101955",
    name: "101955 Bennu",
    description: "Carbonaceous rubble pile visited by OSIRIS-REx; carries \
                  one of the better-constrained long-term impact \
                  probabilities on record.",
    diameter_m: 490.0,
    velocity_km_s: 12.7,
    mass_display: "7.3e10 kg",
    next_approach: "2060-09-23",
    impact_probability: 0.00037,
    orbit: OrbitElements {
        semi_major_axis_au: 1.126,
        eccentricity: 0.204,
        period_days: 437.0,
    },
    approach_history: &[
        ApproachSample { date: "1999-09-23", distance_million_km: 2.2 },
        ApproachSample { date: "2005-09-20", distance_million_km: 5.0 },
        ApproachSample { date: "2054-09-23", distance_million_km: 11.2 },
        ApproachSample { date: "2060-09-23", distance_million_km: 0.75 },
    ],
};

/// 2023 DW, a small object with briefly elevated 2046 odds.
pub static ASTEROID_2023_DW: CatalogAsteroid = CatalogAsteroid {
    id: "2023DW",
    name: "2023 DW",
    description: "Small Aten-class object that briefly topped the risk \
                  lists for a potential 2046 encounter before follow-up \
                  astrometry arrived.",
    diameter_m: 50.0,
    velocity_km_s: 15.5,
    mass_display: "1.6e8 kg",
    next_approach: "2046-02-14",
    impact_probability: 0.0018,
    orbit: OrbitElements {
        semi_major_axis_au: 0.99,
        eccentricity: 0.25,
        period_days: 361.0,
    },
    approach_history: &[
        ApproachSample { date: "2023-02-18", distance_million_km: 9.0 },
        ApproachSample { date: "2029-02-22", distance_million_km: 32.4 },
        ApproachSample { date: "2041-02-10", distance_million_km: 18.7 },
        ApproachSample { date: "2046-02-14", distance_million_km: 1.8 },
    ],
};

/// (29075) 1950 DA, a kilometer-class long-horizon case.
pub static ASTEROID_1950_DA: CatalogAsteroid = CatalogAsteroid {
    id: "29075",
    name: "(29075) 1950 DA",
    description: "Kilometer-scale fast rotator whose distant 2880 \
                  encounter has long anchored century-scale risk studies.",
    diameter_m: 1300.0,
    velocity_km_s: 18.0,
    mass_display: "2.0e12 kg",
    next_approach: "2032-03-05",
    impact_probability: 0.00012,
    orbit: OrbitElements {
        semi_major_axis_au: 1.70,
        eccentricity: 0.51,
        period_days: 808.0,
    },
    approach_history: &[
        ApproachSample { date: "2001-03-05", distance_million_km: 7.8 },
        ApproachSample { date: "2012-03-02", distance_million_km: 41.3 },
        ApproachSample { date: "2023-03-07", distance_million_km: 28.1 },
        ApproachSample { date: "2032-03-05", distance_million_km: 12.6 },
    ],
};

/// 2002 NT7, the first object to register positive Palermo values.
pub static ASTEROID_2002_NT7: CatalogAsteroid = CatalogAsteroid {
    id: "2002NT7",
    name: "2002 NT7",
    description: "Two-kilometer object that caused a brief 2002 media \
                  scare as the first positive-Palermo detection; later \
                  observations removed the risk.",
    diameter_m: 2000.0,
    velocity_km_s: 28.0,
    mass_display: "1.2e13 kg",
    next_approach: "2038-01-13",
    impact_probability: 0.00006,
    orbit: OrbitElements {
        semi_major_axis_au: 1.74,
        eccentricity: 0.53,
        period_days: 837.0,
    },
    approach_history: &[
        ApproachSample { date: "2002-07-17", distance_million_km: 61.0 },
        ApproachSample { date: "2019-01-13", distance_million_km: 38.6 },
        ApproachSample { date: "2038-01-13", distance_million_km: 22.4 },
        ApproachSample { date: "2053-01-11", distance_million_km: 54.2 },
    ],
};

/// 3200 Phaethon, the Geminid parent on a sun-grazing orbit.
pub static PHAETHON: CatalogAsteroid = CatalogAsteroid {
    id: "3200",
    name: "3200 Phaethon",
    description: "Parent body of the Geminid meteor shower on an extreme \
                  sun-grazing orbit; large, fast, and very well tracked.",
    diameter_m: 5100.0,
    velocity_km_s: 30.0,
    mass_display: "1.4e14 kg",
    next_approach: "2093-12-14",
    impact_probability: 0.00002,
    orbit: OrbitElements {
        semi_major_axis_au: 1.271,
        eccentricity: 0.890,
        period_days: 524.0,
    },
    approach_history: &[
        ApproachSample { date: "1974-12-16", distance_million_km: 46.9 },
        ApproachSample { date: "2007-12-10", distance_million_km: 18.1 },
        ApproachSample { date: "2017-12-16", distance_million_km: 10.3 },
        ApproachSample { date: "2093-12-14", distance_million_km: 2.9 },
    ],
};

/// 2011 AG5, once tracked for a 2040 keyhole passage.
pub static ASTEROID_2011_AG5: CatalogAsteroid = CatalogAsteroid {
    id: "2011AG5",
    name: "2011 AG5",
    description: "140-meter object watched for a 2023 keyhole that could \
                  have set up a 2040 return; the keyhole was missed.",
    diameter_m: 140.0,
    velocity_km_s: 9.9,
    mass_display: "4.0e9 kg",
    next_approach: "2040-02-05",
    impact_probability: 0.0000008,
    orbit: OrbitElements {
        semi_major_axis_au: 1.43,
        eccentricity: 0.39,
        period_days: 625.0,
    },
    approach_history: &[
        ApproachSample { date: "2011-01-08", distance_million_km: 1.1 },
        ApproachSample { date: "2023-02-03", distance_million_km: 1.9 },
        ApproachSample { date: "2028-02-07", distance_million_km: 16.8 },
        ApproachSample { date: "2040-02-05", distance_million_km: 0.89 },
    ],
};

/// 433 Eros, a large, safely distant reference object.
pub static EROS: CatalogAsteroid = CatalogAsteroid {
    id: "433",
    name: "433 Eros",
    description: "The first asteroid orbited and landed on (NEAR \
                  Shoemaker). Enormous but on a well-understood orbit \
                  with no near-term risk.",
    diameter_m: 16840.0,
    velocity_km_s: 10.8,
    mass_display: "6.7e15 kg",
    next_approach: "2056-01-24",
    impact_probability: 0.00001,
    orbit: OrbitElements {
        semi_major_axis_au: 1.458,
        eccentricity: 0.223,
        period_days: 643.0,
    },
    approach_history: &[
        ApproachSample { date: "1975-01-23", distance_million_km: 22.5 },
        ApproachSample { date: "2012-01-31", distance_million_km: 26.7 },
        ApproachSample { date: "2025-11-30", distance_million_km: 59.6 },
        ApproachSample { date: "2056-01-24", distance_million_km: 23.6 },
    ],
};
