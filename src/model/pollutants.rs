use std::fmt;

// ---------------------------------------------------------------------------
// Pollutant – one of the nine modelled water pollutants
// ---------------------------------------------------------------------------

/// The nine pollutants the regression model predicts, in the model's fixed
/// output order. `ALL` is the authoritative ordering; everything that maps
/// between arrays and named fields goes through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pollutant {
    Nh4,
    Bsk5,
    Suspended,
    O2,
    No3,
    No2,
    So4,
    Po4,
    Cl,
}

impl Pollutant {
    /// Model output order. Must never be reordered without retraining.
    pub const ALL: [Pollutant; 9] = [
        Pollutant::Nh4,
        Pollutant::Bsk5,
        Pollutant::Suspended,
        Pollutant::O2,
        Pollutant::No3,
        Pollutant::No2,
        Pollutant::So4,
        Pollutant::Po4,
        Pollutant::Cl,
    ];

    /// Display name, as used in issue descriptions and the results table.
    pub fn name(self) -> &'static str {
        match self {
            Pollutant::Nh4 => "NH4",
            Pollutant::Bsk5 => "BSK5",
            Pollutant::Suspended => "Suspended",
            Pollutant::O2 => "O2",
            Pollutant::No3 => "NO3",
            Pollutant::No2 => "NO2",
            Pollutant::So4 => "SO4",
            Pollutant::Po4 => "PO4",
            Pollutant::Cl => "CL",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// PollutantVector – one full set of concentrations (mg/L)
// ---------------------------------------------------------------------------

/// Concentrations for all nine pollutants, in mg/L. Produced either by the
/// predictor or by direct user entry; immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollutantVector {
    pub nh4: f64,
    pub bsk5: f64,
    pub suspended: f64,
    pub o2: f64,
    pub no3: f64,
    pub no2: f64,
    pub so4: f64,
    pub po4: f64,
    pub cl: f64,
}

impl PollutantVector {
    /// Build from an array in `Pollutant::ALL` order (the model output order).
    pub fn from_array(values: [f64; 9]) -> Self {
        PollutantVector {
            nh4: values[0],
            bsk5: values[1],
            suspended: values[2],
            o2: values[3],
            no3: values[4],
            no2: values[5],
            so4: values[6],
            po4: values[7],
            cl: values[8],
        }
    }

    /// Concentrations in `Pollutant::ALL` order.
    pub fn to_array(&self) -> [f64; 9] {
        Pollutant::ALL.map(|p| self.get(p))
    }

    /// Look up a single pollutant's concentration.
    pub fn get(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Nh4 => self.nh4,
            Pollutant::Bsk5 => self.bsk5,
            Pollutant::Suspended => self.suspended,
            Pollutant::O2 => self.o2,
            Pollutant::No3 => self.no3,
            Pollutant::No2 => self.no2,
            Pollutant::So4 => self.so4,
            Pollutant::Po4 => self.po4,
            Pollutant::Cl => self.cl,
        }
    }

    /// Set a single pollutant's concentration (manual-entry form).
    pub fn set(&mut self, pollutant: Pollutant, value: f64) {
        match pollutant {
            Pollutant::Nh4 => self.nh4 = value,
            Pollutant::Bsk5 => self.bsk5 = value,
            Pollutant::Suspended => self.suspended = value,
            Pollutant::O2 => self.o2 = value,
            Pollutant::No3 => self.no3 = value,
            Pollutant::No2 => self.no2 = value,
            Pollutant::So4 => self.so4 = value,
            Pollutant::Po4 => self.po4 = value,
            Pollutant::Cl => self.cl = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_round_trip_follows_all_order() {
        let values = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
        let v = PollutantVector::from_array(values);
        assert_eq!(v.to_array(), values);
        assert_eq!(v.nh4, 0.1);
        assert_eq!(v.o2, 0.4);
        assert_eq!(v.cl, 0.9);
    }

    #[test]
    fn get_matches_all_order() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let v = PollutantVector::from_array(values);
        for (i, p) in Pollutant::ALL.iter().enumerate() {
            assert_eq!(v.get(*p), values[i], "{p}");
        }
    }

    #[test]
    fn set_then_get() {
        let mut v = PollutantVector::from_array([0.0; 9]);
        v.set(Pollutant::O2, 7.5);
        assert_eq!(v.get(Pollutant::O2), 7.5);
        assert_eq!(v.o2, 7.5);
    }

    #[test]
    fn display_names() {
        assert_eq!(Pollutant::Nh4.to_string(), "NH4");
        assert_eq!(Pollutant::Suspended.to_string(), "Suspended");
        assert_eq!(Pollutant::Cl.to_string(), "CL");
    }
}
