use std::fmt;

use serde::{Deserialize, Serialize};

/// A venue where valet events occur. Reference data only; the API never
/// serves locations, so the table is compiled in.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub address: String,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.address)
    }
}

pub fn find_location(id: i64) -> Option<Location> {
    locations().into_iter().find(|location| location.id == id)
}

pub fn locations() -> Vec<Location> {
    VENUES
        .iter()
        .map(|(id, name, address)| Location {
            id: *id,
            name: name.to_string(),
            address: address.to_string(),
        })
        .collect()
}

static VENUES: &[(i64, &str, &str)] = &[
    (1, "Blu on the Hudson", "1200 Harbor Blvd, Weehawken Township, NJ 07086"),
    (2, "Chart House", "1700 Harbor Blvd, Weehawken Township, NJ 07086"),
    (3, "Chateau Grand Hotel", "670 Cranbury Rd, East Brunswick, NJ 08816"),
    (4, "Felina's", "106 W South Orange Ave, South Orange Village, NJ 07079"),
    (5, "Fleming's Condo", "220 Market St, Montvale, NJ 07645"),
    (6, "Fleming's Edgewater", "90 The Promenade, Edgewater, NJ 07020"),
    (7, "Fleming's Montvale", "210 Market St, Montvale, NJ 07645"),
    (8, "Glen Ridge CC", "555 Ridgewood Ave, Glen Ridge, NJ 07028"),
    (9, "Haven", "9 Somerset Ln, Edgewater, NJ 07020"),
    (10, "Hudson House", "2 Chapel Ave, Jersey City, NJ 07305"),
    (11, "Liberty House", "76 Audrey Zapp Dr, Jersey City, NJ 07305"),
    (12, "Lolita's NB", "8809 River Rd, North Bergen, NJ 07047"),
    (13, "Lolita's Westwood", "65 Old Hook Rd, Westwood, NJ 07675"),
    (14, "Nanina's", "540 Mill St, Belleville, NJ 07109"),
    (15, "Orchard Park by David Burke", "670 Cranbury Rd, East Brunswick, NJ 08816"),
    (16, "Park Chateau", "678 Cranbury Rd, East Brunswick, NJ 08816"),
    (17, "Park Savoy", "236 Ridgedale Ave, Florham Park, NJ 07932"),
    (18, "Ruth's Chris", "1000 Harbor Blvd, Weehawken Township, NJ 07086"),
    (19, "Ryland Inn", "115 Old Hwy 28, White House Station, NJ 08889"),
    (20, "Stone House", "50 Stirling Rd, Warren, NJ 07059"),
    (21, "The Grand Summit", "570 Springfield Ave, Summit, NJ 07901"),
    (22, "The View", "201 Lincoln Pk, Jersey City, NJ 07304"),
    (23, "Valley Regency", "1129 Valley Rd, Clifton, NJ 07013"),
];
