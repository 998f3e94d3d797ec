//! Monolithic integrated circuits (MIL-HDBK-217F sections 5.1 - 5.4)
//!
//! Die complexity bands use inclusive upper breakpoints: a device
//! exactly on a breakpoint belongs to the band the breakpoint closes.
//! Element counts beyond the last published band are an error rather
//! than a silent clamp, except where the stress tables themselves
//! carry an extra top band.

use crate::core::error::{lookup, CalcError};
use crate::entities::family::{
    EepromConstruction, GaAsType, IcKind, IcParams, IcTechnology, VlsiProcess, VlsiType,
};
use crate::entities::model::HazardRateModel;
use crate::entities::profile::StressProfile;
use crate::prediction::band_index;

const FAMILY: &str = "integrated circuit";

const BOLTZMANN_EV: f64 = 8.617e-5;

const PI_Q: [f64; 3] = [0.25, 1.0, 2.0];

const PI_E: [f64; 14] = [
    0.5, 2.0, 4.0, 4.0, 6.0, 4.0, 5.0, 5.0, 8.0, 8.0, 0.5, 5.0, 12.0, 220.0,
];

/// Package factor constants, C2 = f0 * pins^f1, by package class.
const C2: [[f64; 2]; 5] = [
    [2.8e-4, 1.08],
    [9.0e-5, 1.51],
    [3.0e-5, 1.82],
    [3.0e-5, 2.01],
    [3.6e-4, 1.08],
];

const LINEAR_BANDS: [f64; 4] = [100.0, 300.0, 1000.0, 10000.0];
const LINEAR_C1: [f64; 4] = [0.01, 0.02, 0.04, 0.06];

const LOGIC_BANDS: [f64; 6] = [100.0, 1000.0, 3000.0, 10000.0, 30000.0, 60000.0];
const LOGIC_C1: [&[f64]; 2] = [
    &[0.0025, 0.005, 0.01, 0.02, 0.04, 0.08],
    &[0.01, 0.02, 0.04, 0.08, 0.16, 0.29],
];

const PAL_BANDS_BIPOLAR: [f64; 3] = [200.0, 1000.0, 5000.0];
const PAL_BANDS_MOS: [f64; 4] = [16000.0, 64000.0, 256000.0, 1000000.0];
const PAL_C1_BIPOLAR: [f64; 3] = [0.01, 0.021, 0.042];
const PAL_C1_MOS: [f64; 4] = [0.00085, 0.0017, 0.0034, 0.0068];

/// Word width bands; the stress table carries a top band above 32 bits
/// that the count table does not.
const MICRO_BANDS: [f64; 3] = [8.0, 16.0, 32.0];
const MICRO_C1: [&[f64]; 2] = [
    &[0.06, 0.12, 0.24, 0.48],
    &[0.14, 0.28, 0.56, 1.12],
];

const MEMORY_BANDS: [f64; 4] = [16000.0, 64000.0, 256000.0, 1000000.0];
const ROM_C1: [&[f64]; 2] = [
    &[0.00065, 0.0013, 0.0026, 0.0052],
    &[0.0094, 0.019, 0.038, 0.075],
];
const EEPROM_C1: [f64; 4] = [0.00085, 0.0017, 0.0034, 0.0068];
const DRAM_C1: [f64; 4] = [0.0013, 0.0025, 0.005, 0.01];
const SRAM_C1: [&[f64]; 2] = [
    &[0.0078, 0.016, 0.031, 0.062],
    &[0.0052, 0.011, 0.021, 0.042],
];

const GAAS_BANDS_MMIC: [f64; 2] = [100.0, 1000.0];
const GAAS_BANDS_DIGITAL: [f64; 2] = [1000.0, 10000.0];
const GAAS_C1_MMIC: [f64; 2] = [4.5, 7.2];
const GAAS_C1_DIGITAL: [f64; 2] = [25.0, 51.0];
const GAAS_PI_A_MMIC: [f64; 3] = [1.0, 3.0, 3.0];
const GAAS_PI_A_DIGITAL: [f64; 1] = [1.0];

const PI_ECC: [f64; 3] = [1.0, 0.72, 0.68];

/// Package type correction for VLSI: DIP, pin grid array, chip
/// carrier, hermetic then nonhermetic.
const PI_PT_HERMETIC: [f64; 3] = [1.0, 2.2, 4.7];
const PI_PT_NONHERMETIC: [f64; 3] = [1.3, 2.9, 6.1];

const COUNT_LINEAR: [&[f64]; 4] = [
    &[
        0.0095, 0.024, 0.039, 0.034, 0.049, 0.057, 0.062, 0.12, 0.13, 0.076, 0.0095, 0.044,
        0.096, 1.1,
    ],
    &[
        0.0170, 0.041, 0.065, 0.054, 0.078, 0.100, 0.110, 0.22, 0.24, 0.130, 0.0170, 0.072,
        0.150, 1.4,
    ],
    &[
        0.0330, 0.074, 0.110, 0.092, 0.130, 0.190, 0.190, 0.41, 0.44, 0.220, 0.0330, 0.120,
        0.260, 2.0,
    ],
    &[
        0.0500, 0.120, 0.180, 0.150, 0.210, 0.300, 0.300, 0.63, 0.67, 0.350, 0.0500, 0.190,
        0.410, 3.4,
    ],
];

const COUNT_LOGIC_BIPOLAR: [&[f64]; 6] = [
    &[
        0.0036, 0.012, 0.024, 0.024, 0.035, 0.025, 0.030, 0.032, 0.049, 0.047, 0.0036, 0.030,
        0.069, 1.20,
    ],
    &[
        0.0060, 0.020, 0.038, 0.037, 0.055, 0.039, 0.048, 0.051, 0.077, 0.074, 0.0060, 0.046,
        0.110, 1.90,
    ],
    &[
        0.0110, 0.035, 0.066, 0.065, 0.097, 0.070, 0.085, 0.091, 0.140, 0.130, 0.0110, 0.082,
        0.190, 3.30,
    ],
    &[
        0.0330, 0.120, 0.220, 0.220, 0.330, 0.230, 0.280, 0.300, 0.460, 0.440, 0.0330, 0.280,
        0.650, 12.0,
    ],
    &[
        0.0520, 0.170, 0.330, 0.330, 0.480, 0.340, 0.420, 0.450, 0.680, 0.650, 0.0520, 0.410,
        0.950, 17.0,
    ],
    &[
        0.0750, 0.230, 0.440, 0.430, 0.630, 0.460, 0.560, 0.610, 0.900, 0.850, 0.0750, 0.530,
        1.200, 21.0,
    ],
];

const COUNT_LOGIC_MOS: [&[f64]; 6] = [
    &[
        0.0057, 0.015, 0.027, 0.027, 0.039, 0.029, 0.035, 0.039, 0.056, 0.052, 0.0057, 0.033,
        0.074, 1.20,
    ],
    &[
        0.0100, 0.028, 0.045, 0.043, 0.062, 0.049, 0.057, 0.068, 0.092, 0.083, 0.0100, 0.053,
        0.120, 1.90,
    ],
    &[
        0.0190, 0.047, 0.080, 0.077, 0.110, 0.088, 0.100, 0.120, 0.170, 0.150, 0.0190, 0.095,
        0.210, 3.30,
    ],
    &[
        0.0490, 0.140, 0.250, 0.240, 0.360, 0.270, 0.320, 0.360, 0.510, 0.480, 0.0490, 0.300,
        0.690, 12.0,
    ],
    &[
        0.0840, 0.220, 0.390, 0.370, 0.540, 0.420, 0.490, 0.560, 0.790, 0.720, 0.0840, 0.460,
        1.000, 17.0,
    ],
    &[
        0.1300, 0.310, 0.530, 0.510, 0.730, 0.590, 0.690, 0.820, 1.100, 0.980, 0.1300, 0.830,
        1.400, 21.0,
    ],
];

const COUNT_PAL_BIPOLAR: [&[f64]; 3] = [
    &[
        0.0061, 0.016, 0.029, 0.027, 0.040, 0.032, 0.037, 0.044, 0.061, 0.054, 0.0061, 0.034,
        0.076, 1.2,
    ],
    &[
        0.0110, 0.028, 0.048, 0.046, 0.065, 0.054, 0.063, 0.077, 0.100, 0.089, 0.0110, 0.057,
        0.120, 1.9,
    ],
    &[
        0.0220, 0.052, 0.087, 0.082, 0.120, 0.099, 0.110, 0.140, 0.190, 0.160, 0.0220, 0.100,
        0.220, 3.3,
    ],
];

const COUNT_PAL_MOS: [&[f64]; 4] = [
    &[
        0.0046, 0.018, 0.035, 0.035, 0.052, 0.035, 0.044, 0.044, 0.070, 0.070, 0.0046, 0.044,
        0.100, 1.9,
    ],
    &[
        0.0056, 0.021, 0.042, 0.042, 0.062, 0.042, 0.052, 0.053, 0.084, 0.083, 0.0056, 0.052,
        0.120, 2.3,
    ],
    &[
        0.0061, 0.022, 0.043, 0.042, 0.063, 0.043, 0.054, 0.055, 0.086, 0.084, 0.0081, 0.053,
        0.130, 2.3,
    ],
    &[
        0.0095, 0.033, 0.064, 0.063, 0.094, 0.065, 0.080, 0.083, 0.130, 0.130, 0.0095, 0.079,
        0.190, 3.3,
    ],
];

const COUNT_MICRO_BIPOLAR: [&[f64]; 3] = [
    &[
        0.028, 0.061, 0.098, 0.091, 0.13, 0.12, 0.13, 0.17, 0.22, 0.18, 0.028, 0.11, 0.24, 3.30,
    ],
    &[
        0.052, 0.110, 0.180, 0.160, 0.23, 0.21, 0.24, 0.32, 0.39, 0.31, 0.052, 0.20, 0.41, 5.60,
    ],
    &[
        0.110, 0.230, 0.360, 0.330, 0.47, 0.44, 0.49, 0.65, 0.81, 0.65, 0.110, 0.42, 0.86, 12.0,
    ],
];

const COUNT_MICRO_MOS: [&[f64]; 3] = [
    &[
        0.048, 0.089, 0.130, 0.120, 0.16, 0.16, 0.17, 0.24, 0.28, 0.22, 0.048, 0.15, 0.28, 3.40,
    ],
    &[
        0.093, 0.170, 0.240, 0.220, 0.29, 0.30, 0.32, 0.45, 0.52, 0.40, 0.093, 0.27, 0.50, 5.60,
    ],
    &[
        0.190, 0.340, 0.490, 0.450, 0.60, 0.61, 0.66, 0.90, 1.10, 0.82, 0.190, 0.54, 1.00, 12.0,
    ],
];

const COUNT_ROM_BIPOLAR: [&[f64]; 4] = [
    &[
        0.010, 0.028, 0.050, 0.046, 0.067, 0.062, 0.070, 0.10, 0.13, 0.096, 0.010, 0.058, 0.13,
        1.9,
    ],
    &[
        0.017, 0.043, 0.071, 0.063, 0.091, 0.095, 0.110, 0.18, 0.21, 0.140, 0.017, 0.081, 0.18,
        2.3,
    ],
    &[
        0.028, 0.065, 0.100, 0.085, 0.120, 0.150, 0.180, 0.30, 0.33, 0.190, 0.028, 0.110, 0.23,
        2.3,
    ],
    &[
        0.053, 0.120, 0.180, 0.150, 0.210, 0.270, 0.290, 0.56, 0.61, 0.330, 0.053, 0.190, 0.39,
        3.4,
    ],
];

const COUNT_ROM_MOS: [&[f64]; 4] = [
    &[
        0.0047, 0.018, 0.036, 0.035, 0.053, 0.037, 0.045, 0.048, 0.074, 0.071, 0.0047, 0.044,
        0.11, 1.9,
    ],
    &[
        0.0059, 0.022, 0.043, 0.042, 0.063, 0.045, 0.055, 0.060, 0.090, 0.086, 0.0059, 0.053,
        0.13, 2.3,
    ],
    &[
        0.0067, 0.023, 0.045, 0.044, 0.066, 0.048, 0.059, 0.068, 0.099, 0.089, 0.0067, 0.055,
        0.13, 2.3,
    ],
    &[
        0.0110, 0.036, 0.068, 0.066, 0.098, 0.075, 0.090, 0.110, 0.150, 0.140, 0.0110, 0.083,
        0.20, 3.3,
    ],
];

const COUNT_EEPROM: [&[f64]; 4] = [
    &[
        0.0049, 0.018, 0.036, 0.036, 0.053, 0.037, 0.046, 0.049, 0.075, 0.072, 0.0048, 0.045,
        0.11, 1.9,
    ],
    &[
        0.0061, 0.022, 0.044, 0.043, 0.064, 0.046, 0.056, 0.062, 0.093, 0.087, 0.0062, 0.054,
        0.13, 2.3,
    ],
    &[
        0.0072, 0.024, 0.048, 0.045, 0.067, 0.051, 0.061, 0.073, 0.100, 0.092, 0.0072, 0.057,
        0.13, 2.3,
    ],
    &[
        0.0120, 0.038, 0.071, 0.068, 0.100, 0.080, 0.095, 0.120, 0.180, 0.140, 0.0120, 0.086,
        0.20, 3.3,
    ],
];

const COUNT_DRAM: [&[f64]; 4] = [
    &[
        0.0040, 0.014, 0.027, 0.027, 0.040, 0.029, 0.035, 0.040, 0.059, 0.055, 0.0040, 0.034,
        0.080, 1.4,
    ],
    &[
        0.0055, 0.019, 0.039, 0.034, 0.051, 0.039, 0.047, 0.056, 0.079, 0.070, 0.0055, 0.043,
        0.100, 1.7,
    ],
    &[
        0.0074, 0.023, 0.043, 0.040, 0.060, 0.049, 0.058, 0.076, 0.100, 0.084, 0.0074, 0.051,
        0.120, 1.9,
    ],
    &[
        0.0110, 0.032, 0.057, 0.053, 0.077, 0.070, 0.080, 0.120, 0.150, 0.110, 0.0110, 0.067,
        0.150, 2.3,
    ],
];

const COUNT_SRAM_BIPOLAR: [&[f64]; 4] = [
    &[
        0.0075, 0.023, 0.043, 0.041, 0.060, 0.050, 0.058, 0.077, 0.10, 0.084, 0.0075, 0.052,
        0.12, 1.9,
    ],
    &[
        0.0120, 0.033, 0.058, 0.054, 0.079, 0.072, 0.083, 0.120, 0.15, 0.110, 0.0120, 0.069,
        0.15, 2.3,
    ],
    &[
        0.0180, 0.045, 0.074, 0.065, 0.095, 0.100, 0.110, 0.190, 0.22, 0.140, 0.0180, 0.084,
        0.18, 2.3,
    ],
    &[
        0.0330, 0.079, 0.130, 0.110, 0.160, 0.180, 0.200, 0.350, 0.39, 0.240, 0.0330, 0.140,
        0.30, 3.4,
    ],
];

const COUNT_SRAM_MOS: [&[f64]; 4] = [
    &[
        0.0079, 0.022, 0.038, 0.034, 0.050, 0.048, 0.054, 0.083, 0.10, 0.073, 0.0079, 0.044,
        0.098, 1.4,
    ],
    &[
        0.0140, 0.034, 0.057, 0.050, 0.073, 0.077, 0.085, 0.140, 0.17, 0.110, 0.0140, 0.065,
        0.140, 1.8,
    ],
    &[
        0.0230, 0.053, 0.084, 0.071, 0.100, 0.120, 0.130, 0.250, 0.27, 0.160, 0.0230, 0.092,
        0.190, 1.9,
    ],
    &[
        0.0430, 0.092, 0.140, 0.110, 0.160, 0.220, 0.230, 0.460, 0.49, 0.260, 0.0430, 0.150,
        0.300, 2.3,
    ],
];

const COUNT_GAAS_MMIC: [&[f64]; 2] = [
    &[
        0.019, 0.034, 0.046, 0.039, 0.052, 0.065, 0.068, 0.11, 0.12, 0.076, 0.019, 0.049, 0.086,
        0.61,
    ],
    &[
        0.025, 0.047, 0.067, 0.058, 0.079, 0.091, 0.097, 0.15, 0.17, 0.11, 0.025, 0.073, 0.14,
        1.3,
    ],
];

const COUNT_GAAS_DIGITAL: [&[f64]; 2] = [
    &[
        0.0085, 0.030, 0.057, 0.057, 0.084, 0.060, 0.073, 0.080, 0.12, 0.11, 0.0085, 0.071,
        0.17, 3.0,
    ],
    &[
        0.0140, 0.053, 0.100, 0.100, 0.150, 0.110, 0.130, 0.140, 0.22, 0.21, 0.0140, 0.130,
        0.31, 5.5,
    ],
];

pub fn parts_count(
    params: &IcParams,
    profile: &StressProfile,
) -> Result<HazardRateModel, CalcError> {
    let row: &[f64] = match &params.kind {
        IcKind::Linear { n_transistors } => {
            let band = complexity_band("n_transistors", &LINEAR_BANDS, *n_transistors, 4)?;
            COUNT_LINEAR[band]
        }
        IcKind::Logic { n_gates, technology } => {
            let band = complexity_band("n_gates", &LOGIC_BANDS, *n_gates, 6)?;
            match technology {
                IcTechnology::Bipolar => COUNT_LOGIC_BIPOLAR[band],
                IcTechnology::Mos => COUNT_LOGIC_MOS[band],
            }
        }
        IcKind::PalPla { n_gates, technology } => match technology {
            IcTechnology::Bipolar => {
                COUNT_PAL_BIPOLAR[complexity_band("n_gates", &PAL_BANDS_BIPOLAR, *n_gates, 3)?]
            }
            IcTechnology::Mos => {
                COUNT_PAL_MOS[complexity_band("n_gates", &PAL_BANDS_MOS, *n_gates, 4)?]
            }
        },
        IcKind::Microprocessor { n_bits, technology } => {
            let band = complexity_band("n_bits", &MICRO_BANDS, *n_bits, 3)?;
            match technology {
                IcTechnology::Bipolar => COUNT_MICRO_BIPOLAR[band],
                IcTechnology::Mos => COUNT_MICRO_MOS[band],
            }
        }
        IcKind::Rom { n_bits, technology } => {
            let band = complexity_band("n_bits", &MEMORY_BANDS, *n_bits, 4)?;
            match technology {
                IcTechnology::Bipolar => COUNT_ROM_BIPOLAR[band],
                IcTechnology::Mos => COUNT_ROM_MOS[band],
            }
        }
        IcKind::Eeprom { n_bits, .. } => {
            COUNT_EEPROM[complexity_band("n_bits", &MEMORY_BANDS, *n_bits, 4)?]
        }
        IcKind::Dram { n_bits } => {
            COUNT_DRAM[complexity_band("n_bits", &MEMORY_BANDS, *n_bits, 4)?]
        }
        IcKind::Sram { n_bits, technology } => {
            let band = complexity_band("n_bits", &MEMORY_BANDS, *n_bits, 4)?;
            match technology {
                IcTechnology::Bipolar => COUNT_SRAM_BIPOLAR[band],
                IcTechnology::Mos => COUNT_SRAM_MOS[band],
            }
        }
        IcKind::GaAs {
            n_elements,
            gaas_type,
            ..
        } => match gaas_type {
            GaAsType::Mmic => {
                COUNT_GAAS_MMIC[complexity_band("n_elements", &GAAS_BANDS_MMIC, *n_elements, 2)?]
            }
            GaAsType::Digital => COUNT_GAAS_DIGITAL
                [complexity_band("n_elements", &GAAS_BANDS_DIGITAL, *n_elements, 2)?],
        },
        IcKind::Vlsi { .. } => {
            return Err(CalcError::UnsupportedMethod {
                family: FAMILY,
                method: "parts count",
            })
        }
    };

    let lambda_b = lookup(FAMILY, "lambda_b_count", row, profile.environment_active)?;
    let pi_q = lookup(FAMILY, "piQ", &PI_Q, params.quality)?;

    let mut model = HazardRateModel::new();
    model.record("lambda_b", lambda_b);
    model.record("piQ", pi_q);
    model.model_result = lambda_b * pi_q;
    Ok(model)
}

pub fn part_stress(
    params: &IcParams,
    profile: &StressProfile,
) -> Result<HazardRateModel, CalcError> {
    let junction = profile.junction_temperature();
    let pi_q = lookup(FAMILY, "piQ", &PI_Q, params.quality)?;
    let pi_e = lookup(FAMILY, "piE", &PI_E, profile.environment_active)?;
    let pi_l = learning_factor(params.years_in_production);

    let mut model = HazardRateModel::new();
    model.record("junction_temperature", junction);

    if let IcKind::Vlsi {
        vlsi_type,
        manufacturing,
        package_type,
        hermetic,
        die_area,
        feature_size,
        esd_voltage,
    } = &params.kind
    {
        if *feature_size <= 0.0 {
            return Err(CalcError::DegenerateInput {
                field: "feature_size",
                value: *feature_size,
            });
        }
        let lambda_bd = match vlsi_type {
            VlsiType::LogicGateArray => 0.16,
            VlsiType::Memory => 0.24,
        };
        let lambda_bp = 0.0022 + 1.72e-5 * params.n_active_pins as f64;
        let lambda_eos = (-(1.0 - 0.00057 * (-0.0002 * esd_voltage).exp()).ln()) / 0.00876;
        let pi_t = temperature_factor(0.35, 296.0, junction);
        let pi_cd = (die_area / 0.21) * (2.0 / feature_size).powi(2) * 0.64 + 0.36;
        let pi_mfg = match manufacturing {
            VlsiProcess::QmlQpl => 0.55,
            VlsiProcess::NonQml => 2.0,
        };
        let pi_pt = if *hermetic {
            lookup(FAMILY, "piPT", &PI_PT_HERMETIC, *package_type)?
        } else {
            lookup(FAMILY, "piPT", &PI_PT_NONHERMETIC, *package_type)?
        };

        model.record("lambdaBD", lambda_bd);
        model.record("lambdaBP", lambda_bp);
        model.record("lambdaEOS", lambda_eos);
        model.record("piT", pi_t);
        model.record("piCD", pi_cd);
        model.record("piMFG", pi_mfg);
        model.record("piPT", pi_pt);
        model.record("piQ", pi_q);
        model.record("piE", pi_e);
        model.model_result = lambda_bd * pi_mfg * pi_t * pi_cd
            + lambda_bp * pi_e * pi_q * pi_pt
            + lambda_eos;
        return Ok(model);
    }

    let c1 = die_complexity_factor(&params.kind)?;
    let c2 = package_factor(params.package, params.n_active_pins);
    model.record("C1", c1);
    model.record("C2", c2);

    let (activation_energy, reference_temperature) = match &params.kind {
        IcKind::Linear { .. } | IcKind::PalPla { .. } | IcKind::Microprocessor { .. } => {
            (0.65, 296.0)
        }
        IcKind::Logic { technology, .. } => match technology {
            IcTechnology::Bipolar => (0.4, 296.0),
            IcTechnology::Mos => (0.6, 296.0),
        },
        IcKind::Rom { .. } | IcKind::Eeprom { .. } | IcKind::Dram { .. } | IcKind::Sram { .. } => {
            (0.6, 296.0)
        }
        IcKind::GaAs { gaas_type, .. } => match gaas_type {
            GaAsType::Mmic => (1.5, 423.0),
            GaAsType::Digital => (1.4, 423.0),
        },
        IcKind::Vlsi { .. } => unreachable!(),
    };
    let pi_t = temperature_factor(activation_energy, reference_temperature, junction);
    model.record("piT", pi_t);
    model.record("piL", pi_l);
    model.record("piQ", pi_q);
    model.record("piE", pi_e);

    match &params.kind {
        IcKind::Eeprom {
            n_bits,
            construction,
            n_cycles,
            error_correction,
        } => {
            let pi_ecc = lookup(FAMILY, "piECC", &PI_ECC, *error_correction)?;
            let lambda_cyc =
                write_cycle_hazard_rate(*n_cycles, *construction, *n_bits, junction, pi_q)
                    * pi_ecc;
            model.record("piECC", pi_ecc);
            model.record("lambda_cyc", lambda_cyc);
            model.model_result = (c1 * pi_t + c2 * pi_e + lambda_cyc) * pi_q * pi_l;
        }
        IcKind::Rom { .. } | IcKind::Dram { .. } | IcKind::Sram { .. } => {
            model.model_result = (c1 * pi_t + c2 * pi_e) * pi_q * pi_l;
        }
        IcKind::GaAs {
            gaas_type,
            application,
            ..
        } => {
            let pi_a = match gaas_type {
                GaAsType::Mmic => lookup(FAMILY, "piA", &GAAS_PI_A_MMIC, *application)?,
                GaAsType::Digital => lookup(FAMILY, "piA", &GAAS_PI_A_DIGITAL, *application)?,
            };
            model.record("piA", pi_a);
            model.model_result = (c1 * pi_t * pi_a + c2 * pi_e) * pi_q * pi_l;
        }
        _ => {
            model.model_result = (c1 * pi_t + c2 * pi_e) * pi_q * pi_l;
        }
    }
    Ok(model)
}

/// Die complexity factor C1 for the non-VLSI sub-families.
fn die_complexity_factor(kind: &IcKind) -> Result<f64, CalcError> {
    Ok(match kind {
        IcKind::Linear { n_transistors } => {
            LINEAR_C1[complexity_band("n_transistors", &LINEAR_BANDS, *n_transistors, 4)?]
        }
        IcKind::Logic { n_gates, technology } => {
            let band = complexity_band("n_gates", &LOGIC_BANDS, *n_gates, 6)?;
            technology_row(&LOGIC_C1, *technology)[band]
        }
        IcKind::PalPla { n_gates, technology } => match technology {
            IcTechnology::Bipolar => {
                PAL_C1_BIPOLAR[complexity_band("n_gates", &PAL_BANDS_BIPOLAR, *n_gates, 3)?]
            }
            IcTechnology::Mos => {
                PAL_C1_MOS[complexity_band("n_gates", &PAL_BANDS_MOS, *n_gates, 4)?]
            }
        },
        IcKind::Microprocessor { n_bits, technology } => {
            // The stress table has a fourth band for word widths above
            // 32 bits.
            let band = complexity_band("n_bits", &MICRO_BANDS, *n_bits, 4)?;
            technology_row(&MICRO_C1, *technology)[band]
        }
        IcKind::Rom { n_bits, technology } => {
            let band = complexity_band("n_bits", &MEMORY_BANDS, *n_bits, 4)?;
            technology_row(&ROM_C1, *technology)[band]
        }
        IcKind::Eeprom { n_bits, .. } => {
            EEPROM_C1[complexity_band("n_bits", &MEMORY_BANDS, *n_bits, 4)?]
        }
        IcKind::Dram { n_bits } => {
            DRAM_C1[complexity_band("n_bits", &MEMORY_BANDS, *n_bits, 4)?]
        }
        IcKind::Sram { n_bits, technology } => {
            let band = complexity_band("n_bits", &MEMORY_BANDS, *n_bits, 4)?;
            technology_row(&SRAM_C1, *technology)[band]
        }
        IcKind::GaAs {
            n_elements,
            gaas_type,
            ..
        } => match gaas_type {
            GaAsType::Mmic => {
                GAAS_C1_MMIC[complexity_band("n_elements", &GAAS_BANDS_MMIC, *n_elements, 2)?]
            }
            GaAsType::Digital => GAAS_C1_DIGITAL
                [complexity_band("n_elements", &GAAS_BANDS_DIGITAL, *n_elements, 2)?],
        },
        IcKind::Vlsi { .. } => unreachable!(),
    })
}

fn technology_row<'a, T>(rows: &'a [T; 2], technology: IcTechnology) -> &'a T {
    match technology {
        IcTechnology::Bipolar => &rows[0],
        IcTechnology::Mos => &rows[1],
    }
}

/// Band of an element count among inclusive upper breakpoints, capped
/// at `bands` entries of the backing table.
fn complexity_band(
    field: &'static str,
    breakpoints: &[f64],
    n_elements: u32,
    bands: usize,
) -> Result<usize, CalcError> {
    let band = band_index(breakpoints, n_elements as f64);
    if n_elements == 0 || band >= bands {
        return Err(CalcError::OutOfRange {
            field: field.to_string(),
            value: n_elements as f64,
            min: 1.0,
            max: breakpoints[bands.min(breakpoints.len()) - 1],
        });
    }
    Ok(band)
}

/// 0.1 * exp(-Ea/k * (1/Tj - 1/Tref)), temperatures in K.
fn temperature_factor(activation_energy: f64, reference_temperature: f64, junction: f64) -> f64 {
    0.1 * ((-activation_energy / BOLTZMANN_EV)
        * (1.0 / (junction + 273.0) - 1.0 / reference_temperature))
        .exp()
}

/// Learning factor from years the device has been in production.
fn learning_factor(years: f64) -> f64 {
    0.01 * (5.35 - 0.35 * years).exp()
}

/// EEPROM write cycling hazard rate, before the error correction
/// factor.
fn write_cycle_hazard_rate(
    n_cycles: u32,
    construction: EepromConstruction,
    n_bits: u32,
    junction: f64,
    pi_q: f64,
) -> f64 {
    let a1 = 6.817e-6 * n_cycles as f64;
    let inv_t = 1.0 / (junction + 273.0);
    match construction {
        EepromConstruction::Flotox => {
            let b1 = (n_bits as f64 / 16000.0).powf(0.5)
                * ((-0.15 / 8.63e-5) * (inv_t - 1.0 / 333.0)).exp();
            a1 * b1
        }
        EepromConstruction::TexturedPoly => {
            let a2 = if n_cycles > 300_000 && n_cycles <= 400_000 {
                1.1
            } else {
                2.3
            };
            let b1 = (n_bits as f64 / 64000.0).powf(0.25)
                * ((0.1 / 8.63e-5) * (inv_t - 1.0 / 303.0)).exp();
            let b2 = (n_bits as f64 / 64000.0).powf(0.25)
                * ((-0.12 / 8.63e-5) * (inv_t - 1.0 / 303.0)).exp();
            a1 * b1 + a2 * b2 / pi_q
        }
    }
}

/// Package factor C2 from the package style and active pin count.
fn package_factor(package: usize, n_active_pins: usize) -> f64 {
    let class = match package {
        1..=3 => 0,
        4 => 1,
        5 => 2,
        6 => 3,
        _ => 4,
    };
    C2[class][0] * (n_active_pins as f64).powf(C2[class][1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ic(kind: IcKind) -> IcParams {
        IcParams {
            kind,
            quality: 2,
            n_active_pins: 24,
            package: 1,
            years_in_production: 3.0,
        }
    }

    #[test]
    fn test_linear_parts_count_bands() {
        let profile = StressProfile {
            environment_active: 5,
            ..Default::default()
        };
        let model = parts_count(
            &ic(IcKind::Linear { n_transistors: 300 }),
            &profile,
        )
        .unwrap();
        assert_eq!(model.factor("lambda_b"), Some(0.078));

        let model = parts_count(
            &ic(IcKind::Linear { n_transistors: 301 }),
            &profile,
        )
        .unwrap();
        assert_eq!(model.factor("lambda_b"), Some(0.130));
    }

    #[test]
    fn test_logic_count_first_band_at_exact_breakpoint() {
        let params = ic(IcKind::Logic {
            n_gates: 100,
            technology: IcTechnology::Bipolar,
        });
        let model = parts_count(&params, &StressProfile::default()).unwrap();
        assert_eq!(model.factor("lambda_b"), Some(0.0036));
    }

    #[test]
    fn test_vlsi_has_no_parts_count() {
        let params = ic(IcKind::Vlsi {
            vlsi_type: VlsiType::Memory,
            manufacturing: VlsiProcess::QmlQpl,
            package_type: 1,
            hermetic: true,
            die_area: 0.4,
            feature_size: 0.8,
            esd_voltage: 2000.0,
        });
        let err = parts_count(&params, &StressProfile::default()).unwrap_err();
        assert!(matches!(err, CalcError::UnsupportedMethod { .. }));
    }

    #[test]
    fn test_microprocessor_count_rejects_wide_word() {
        let params = ic(IcKind::Microprocessor {
            n_bits: 64,
            technology: IcTechnology::Mos,
        });
        let err = parts_count(&params, &StressProfile::default()).unwrap_err();
        assert!(matches!(err, CalcError::OutOfRange { .. }));
    }

    #[test]
    fn test_microprocessor_stress_has_extra_top_band() {
        let params = ic(IcKind::Microprocessor {
            n_bits: 64,
            technology: IcTechnology::Bipolar,
        });
        let model = part_stress(&params, &StressProfile::default()).unwrap();
        assert_eq!(model.factor("C1"), Some(0.48));
    }

    #[test]
    fn test_logic_part_stress_composition() {
        let params = ic(IcKind::Logic {
            n_gates: 1500,
            technology: IcTechnology::Mos,
        });
        let profile = StressProfile {
            case_temperature: 45.0,
            operating_power: 0.25,
            theta_jc: 28.0,
            environment_active: 3,
            ..Default::default()
        };
        let model = part_stress(&params, &profile).unwrap();

        // Tj = 45 + 0.25 * 28 = 52.
        let pi_t = 0.1 * ((-0.6_f64 / 8.617e-5) * (1.0 / 325.0 - 1.0 / 296.0)).exp();
        let c2 = 2.8e-4 * 24.0_f64.powf(1.08);
        let pi_l = 0.01 * (5.35_f64 - 1.05).exp();
        assert_eq!(model.factor("C1"), Some(0.04));
        assert!((model.factor("piT").unwrap() - pi_t).abs() < 1e-12);
        assert!((model.factor("C2").unwrap() - c2).abs() < 1e-12);
        let expected = (0.04 * pi_t + c2 * 4.0) * 1.0 * pi_l;
        assert!((model.model_result - expected).abs() < 1e-12);
    }

    #[test]
    fn test_eeprom_flotox_write_cycling() {
        let rate = write_cycle_hazard_rate(10_000, EepromConstruction::Flotox, 16000, 60.0, 1.0);
        let b1 = ((-0.15_f64 / 8.63e-5) * (1.0 / 333.0 - 1.0 / 333.0)).exp();
        assert!((rate - 6.817e-6 * 10_000.0 * b1).abs() < 1e-9);
    }

    #[test]
    fn test_eeprom_stress_includes_cycling_term() {
        let params = ic(IcKind::Eeprom {
            n_bits: 64000,
            construction: EepromConstruction::TexturedPoly,
            n_cycles: 350_000,
            error_correction: 2,
        });
        let model = part_stress(&params, &StressProfile::default()).unwrap();
        assert_eq!(model.factor("piECC"), Some(0.72));
        assert!(model.factor("lambda_cyc").unwrap() > 0.0);
    }

    #[test]
    fn test_gaas_application_factor() {
        let params = ic(IcKind::GaAs {
            n_elements: 50,
            gaas_type: GaAsType::Mmic,
            application: 2,
        });
        let model = part_stress(&params, &StressProfile::default()).unwrap();
        assert_eq!(model.factor("C1"), Some(4.5));
        assert_eq!(model.factor("piA"), Some(3.0));

        let digital = ic(IcKind::GaAs {
            n_elements: 500,
            gaas_type: GaAsType::Digital,
            application: 2,
        });
        let err = part_stress(&digital, &StressProfile::default()).unwrap_err();
        assert!(matches!(err, CalcError::InvalidIndex { table: "piA", .. }));
    }

    #[test]
    fn test_vlsi_part_stress() {
        let params = ic(IcKind::Vlsi {
            vlsi_type: VlsiType::LogicGateArray,
            manufacturing: VlsiProcess::QmlQpl,
            package_type: 2,
            hermetic: true,
            die_area: 0.42,
            feature_size: 1.0,
            esd_voltage: 2000.0,
        });
        let model = part_stress(&params, &StressProfile::default()).unwrap();

        let lambda_bp = 0.0022 + 1.72e-5 * 24.0;
        let lambda_eos = (-(1.0 - 0.00057 * (-0.4_f64).exp()).ln()) / 0.00876;
        let pi_cd = (0.42 / 0.21) * 4.0 * 0.64 + 0.36;
        let pi_t = temperature_factor(0.35, 296.0, 25.0);
        assert_eq!(model.factor("lambdaBD"), Some(0.16));
        assert_eq!(model.factor("piMFG"), Some(0.55));
        assert_eq!(model.factor("piPT"), Some(2.2));
        assert!((model.factor("piCD").unwrap() - pi_cd).abs() < 1e-12);
        let expected = 0.16 * 0.55 * pi_t * pi_cd + lambda_bp * 0.5 * 1.0 * 2.2 + lambda_eos;
        assert!((model.model_result - expected).abs() < 1e-10);
    }

    #[test]
    fn test_learning_factor_declines_with_production_years() {
        assert!(learning_factor(0.5) > learning_factor(2.0));
        assert!((learning_factor(2.0) - 0.01 * (4.65_f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_zero_elements_is_out_of_range() {
        let params = ic(IcKind::Linear { n_transistors: 0 });
        let err = parts_count(&params, &StressProfile::default()).unwrap_err();
        assert!(matches!(err, CalcError::OutOfRange { .. }));
    }
}
