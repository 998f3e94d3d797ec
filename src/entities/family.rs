//! Component families - the closed set of supported part types
//!
//! Each family variant carries only that family's extra parameters; the
//! shared electrical/thermal operating point lives in
//! [`StressProfile`](crate::entities::StressProfile). Ordinal fields
//! (quality, application, style, ...) are the 1-based MIL-HDBK-217F
//! table ordinals and are validated at lookup time.

use serde::{Deserialize, Serialize};

/// A component family tag plus its family-specific parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum ComponentFamily {
    Resistor(ResistorParams),
    Capacitor(CapacitorParams),
    Inductor(InductorParams),
    Relay(RelayParams),
    Switch(SwitchParams),
    Connector(ConnectorParams),
    Crystal(CrystalParams),
    Filter(FilterParams),
    Meter(MeterParams),
    Semiconductor(SemiconductorParams),
    IntegratedCircuit(IcParams),
}

impl ComponentFamily {
    /// Stable family name used in error reports and output tables.
    pub fn name(&self) -> &'static str {
        match self {
            ComponentFamily::Resistor(_) => "resistor",
            ComponentFamily::Capacitor(_) => "capacitor",
            ComponentFamily::Inductor(_) => "inductor",
            ComponentFamily::Relay(_) => "relay",
            ComponentFamily::Switch(_) => "switch",
            ComponentFamily::Connector(_) => "connector",
            ComponentFamily::Crystal(_) => "crystal",
            ComponentFamily::Filter(_) => "filter",
            ComponentFamily::Meter(_) => "meter",
            ComponentFamily::Semiconductor(_) => "semiconductor",
            ComponentFamily::IntegratedCircuit(_) => "integrated circuit",
        }
    }
}

impl std::fmt::Display for ComponentFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Fixed carbon composition resistor (MIL-R-11)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResistorParams {
    /// Quality level, 1..=6 (S, R, P, M, MIL-R-11, lower)
    pub quality: usize,
    /// Resistance in ohms, selects the resistance-range factor
    pub resistance: f64,
}

impl Default for ResistorParams {
    fn default() -> Self {
        ResistorParams {
            quality: 1,
            resistance: 1000.0,
        }
    }
}

/// Temperature rating of a part's construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureRating {
    C85,
    C125,
}

impl Default for TemperatureRating {
    fn default() -> Self {
        TemperatureRating::C85
    }
}

/// Fixed paper bypass capacitor (MIL-C-25)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacitorParams {
    /// Quality level, 1..=2 (MIL-SPEC, lower)
    pub quality: usize,
    /// Capacitance in microfarads
    pub capacitance: f64,
    /// Maximum rated operating temperature of the style
    pub temperature_rating: TemperatureRating,
}

impl Default for CapacitorParams {
    fn default() -> Self {
        CapacitorParams {
            quality: 1,
            capacitance: 1.0,
            temperature_rating: TemperatureRating::C85,
        }
    }
}

/// Inductive device kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InductorKind {
    Transformer,
    Coil,
}

/// Insulation class, selects the base hazard rate curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsulationClass {
    /// 85 C (class A)
    Class85,
    /// 105 C (class B)
    Class105,
    /// 130 C (class F)
    Class130,
    /// 155 C (class H)
    Class155,
    /// 170 C (class N)
    Class170,
    /// Above 170 C (class C)
    Above170,
}

/// Transformer or coil
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InductorParams {
    pub kind: InductorKind,
    /// Count-table row: transformers 1..=4 (flyback, audio, power,
    /// RF), coils 1..=2 (fixed, variable)
    pub style: usize,
    /// Quality level, 1..=3 for parts count (S/R/P, M, lower);
    /// 1..=2 for part stress (MIL-SPEC, lower)
    pub quality: usize,
    pub insulation: InsulationClass,
    /// Power loss in W, drives the hot-spot temperature rise
    #[serde(default)]
    pub power_loss: f64,
    /// Radiating surface area in square inches, when known
    #[serde(default)]
    pub radiating_area: f64,
    /// Transformer weight in pounds, fallback for the rise estimate
    #[serde(default)]
    pub weight: f64,
}

/// Electrical character of the switched or relayed load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactLoad {
    Resistive,
    Inductive,
    Lamp,
}

/// Mechanical (electromagnetic) relay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayParams {
    /// Count-table row, 1..=6 (general purpose, contactor, latching,
    /// reed, thermal/bimetal, meter movement)
    pub style: usize,
    /// Maximum rated temperature of the coil insulation
    pub rated_temperature: TemperatureRating,
    pub load: ContactLoad,
    /// Contact form, 1..=9 (SPST .. 6PDT)
    pub contact_form: usize,
    /// Switching cycles per hour
    pub cycles_per_hour: f64,
    /// Application/construction row for the piF table, 1..=3
    /// (dry circuit signal, general purpose, high current power)
    pub application: usize,
    /// Quality level, 1..=8 (R, P, X, U, M, L, lower, non-established
    /// reliability); 8 selects the non-MIL tables throughout
    pub quality: usize,
}

/// Toggle or pushbutton switch actuation construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitchConstruction {
    SnapAction,
    NonSnapAction,
}

/// Toggle/pushbutton switch (MIL-S-3950 et al.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchParams {
    pub construction: SwitchConstruction,
    pub load: ContactLoad,
    /// Switching cycles per hour
    pub cycles_per_hour: f64,
    /// Quality level, 1..=2 (MIL-SPEC, lower)
    pub quality: usize,
}

/// Multipin circular or rack-and-panel connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorParams {
    /// Configuration, 1..=5 (rack and panel, circular, power, coaxial,
    /// triaxial); selects the count-table row
    pub configuration: usize,
    /// Insert material, 1..=15 (vitreous glass .. polyethylene);
    /// selects the base hazard rate curve
    pub insert_material: usize,
    /// Contact gauge, 1..=4 (22, 20, 16, 12 AWG)
    pub contact_gauge: usize,
    /// Current per contact in A
    pub amps_per_contact: f64,
    /// Number of active (current carrying) pins
    pub active_pins: usize,
    /// Mate/unmate cycles per 1000 hours
    pub mate_cycles: f64,
    /// Quality level, 1..=2 (MIL-SPEC, lower)
    pub quality: usize,
}

/// Quartz crystal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrystalParams {
    /// Operating frequency in MHz
    pub frequency: f64,
    /// Quality level, 1..=2 (MIL-SPEC, lower)
    pub quality: usize,
}

/// Electrical filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterParams {
    /// Style, 1..=3 (ceramic-ferrite, discrete LC, discrete LC with
    /// crystal)
    pub style: usize,
    /// Quality level, 1..=2 (MIL-SPEC, lower)
    pub quality: usize,
}

/// Elapsed-time or panel meter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MeterParams {
    /// Elapsed time meter; the temperature stress comes from the
    /// profile's ambient and rated-max temperatures
    ElapsedTime {
        /// 1..=3 (AC, inverter driven, commutator DC)
        meter_type: usize,
    },
    /// Panel (analog pointer) meter
    Panel {
        /// 1..=2 (direct current, alternating current)
        application: usize,
        /// 1..=3 (ammeter, voltmeter, other)
        function: usize,
        /// Quality level, 1..=2 (MIL-SPEC, lower)
        quality: usize,
    },
}

/// Discrete semiconductor sub-families
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SemiconductorParams {
    /// Low frequency diode (MIL-HDBK-217F 6.1)
    DiodeLf {
        /// Application, 1..=7 (general purpose analog, switching, power
        /// rectifier fast recovery, power rectifier/Schottky, power
        /// rectifier stacked, transient suppressor, voltage
        /// reference/regulator)
        application: usize,
        /// Contact construction, 1..=2 (metallurgically bonded,
        /// non-metallurgically bonded)
        construction: usize,
        /// Quality level, 1..=5 (JANTXV, JANTX, JAN, lower, plastic)
        quality: usize,
    },
    /// High frequency (microwave/RF) diode (MIL-HDBK-217F 6.2)
    DiodeHf {
        /// Diode type, 1..=6 (Si IMPATT, Gunn, tunnel, PIN, Schottky,
        /// varactor)
        diode_type: usize,
        /// Application, 1..=3 (varactor voltage control, varactor
        /// multiplier, all other)
        application: usize,
        /// Quality level, 1..=5
        quality: usize,
    },
    /// Low frequency bipolar transistor (MIL-HDBK-217F 6.3)
    Transistor {
        /// Application, 1..=2 (linear amplification, switching)
        application: usize,
        /// Quality level, 1..=5 (JANTXV, JANTX, JAN, lower, plastic)
        quality: usize,
    },
}

/// Die technology for logic and memory devices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IcTechnology {
    Bipolar,
    Mos,
}

/// EEPROM cell construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EepromConstruction {
    Flotox,
    TexturedPoly,
}

/// GaAs device class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaAsType {
    Mmic,
    Digital,
}

/// VLSI die class, selects the die base hazard rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VlsiType {
    LogicGateArray,
    Memory,
}

/// VLSI manufacturing process class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VlsiProcess {
    /// QML or QPL qualified line
    QmlQpl,
    NonQml,
}

/// Monolithic integrated circuit sub-families
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IcKind {
    Linear {
        n_transistors: u32,
    },
    Logic {
        n_gates: u32,
        technology: IcTechnology,
    },
    PalPla {
        n_gates: u32,
        technology: IcTechnology,
    },
    Microprocessor {
        n_bits: u32,
        technology: IcTechnology,
    },
    Rom {
        n_bits: u32,
        technology: IcTechnology,
    },
    Eeprom {
        n_bits: u32,
        construction: EepromConstruction,
        /// Expected lifetime write cycles
        n_cycles: u32,
        /// Error correction, 1..=3 (none, Hamming, two-needs-one
        /// redundant cell)
        error_correction: usize,
    },
    Dram {
        n_bits: u32,
    },
    Sram {
        n_bits: u32,
        technology: IcTechnology,
    },
    GaAs {
        n_elements: u32,
        gaas_type: GaAsType,
        /// Application, MMIC 1..=3 (low noise/low power, driver/high
        /// power, unknown), digital 1
        application: usize,
    },
    Vlsi {
        vlsi_type: VlsiType,
        manufacturing: VlsiProcess,
        /// Package, 1..=3 (DIP, pin grid array, chip carrier/SMT)
        package_type: usize,
        /// True for hermetic packages
        hermetic: bool,
        /// Die area in square cm
        die_area: f64,
        /// Feature size in microns
        feature_size: f64,
        /// ESD withstand voltage
        esd_voltage: f64,
    },
}

/// Monolithic integrated circuit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcParams {
    #[serde(flatten)]
    pub kind: IcKind,
    /// Quality level, 1..=3 (class S, class B, lower)
    pub quality: usize,
    /// Number of active (current carrying) package pins
    pub n_active_pins: usize,
    /// Package style, 1..=7 (hermetic DIP w/ weld seal, pin grid array,
    /// hermetic SMT, DIP w/ glass seal, flatpack, can, nonhermetic)
    pub package: usize,
    /// Years the device has been in production
    pub years_in_production: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_yaml_tag_round_trip() {
        let family = ComponentFamily::Resistor(ResistorParams {
            quality: 2,
            resistance: 4.7e4,
        });
        let yaml = serde_yml::to_string(&family).unwrap();
        assert!(yaml.contains("family: resistor"));
        let back: ComponentFamily = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(back, family);
    }

    #[test]
    fn test_nested_kind_tags_deserialize() {
        let yaml = "family: meter\nkind: panel\napplication: 1\nfunction: 2\nquality: 1\n";
        let family: ComponentFamily = serde_yml::from_str(yaml).unwrap();
        assert_eq!(
            family,
            ComponentFamily::Meter(MeterParams::Panel {
                application: 1,
                function: 2,
                quality: 1,
            })
        );
    }

    #[test]
    fn test_ic_params_flatten_kind() {
        let yaml = "family: integrated_circuit\nkind: logic\nn_gates: 1500\ntechnology: mos\nquality: 2\nn_active_pins: 24\npackage: 1\nyears_in_production: 3.0\n";
        let family: ComponentFamily = serde_yml::from_str(yaml).unwrap();
        match family {
            ComponentFamily::IntegratedCircuit(ic) => {
                assert_eq!(ic.quality, 2);
                assert_eq!(
                    ic.kind,
                    IcKind::Logic {
                        n_gates: 1500,
                        technology: IcTechnology::Mos
                    }
                );
            }
            other => panic!("wrong family: {:?}", other),
        }
    }

    #[test]
    fn test_family_names() {
        let family = ComponentFamily::Crystal(CrystalParams {
            frequency: 10.0,
            quality: 1,
        });
        assert_eq!(family.name(), "crystal");
        assert_eq!(family.to_string(), "crystal");
    }
}
