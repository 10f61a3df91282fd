use serde::{Deserialize, Serialize};

use crate::{CodeTable, DemographicCode, PlaceCode, Result, Year};

/// The (place, year, demographic) triple every chart is computed for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub place: PlaceCode,
    pub year: Year,
    pub demographic: DemographicCode,
}

impl Selection {
    pub fn new(place: PlaceCode, year: Year, demographic: DemographicCode) -> Self {
        Self {
            place,
            year,
            demographic,
        }
    }

    /// Builds a selection from raw selector values, accepting names or codes
    /// for place and demographic.
    pub fn parse(
        places: &CodeTable,
        demographics: &CodeTable,
        place: &str,
        year: i64,
        demographic: &str,
    ) -> Result<Self> {
        let place = PlaceCode::new(places.resolve(place)?)?;
        let demographic = DemographicCode::new(demographics.resolve(demographic)?)?;
        Ok(Self::new(place, Year::new(year)?, demographic))
    }

    /// Checks both codes against their tables.
    pub fn validate(&self, places: &CodeTable, demographics: &CodeTable) -> Result<()> {
        places.name_for_code(self.place.as_str())?;
        demographics.name_for_code(self.demographic.as_str())?;
        Ok(())
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            place: PlaceCode::from_static("43475"),
            year: Year::default(),
            demographic: DemographicCode::from_static("total"),
        }
    }
}
