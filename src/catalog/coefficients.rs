//! Named coefficient tables.
//!
//! Constants live here rather than inline so they can be checked on their own
//! (lengths, shallow-water normalisation) and reused by several formulas.

/// Numerator and denominator coefficients of one fractional-power Padé approximant.
///
/// Evaluated as `√α · Σ num[j] αʲ / (1 + α Σ den[k] αᵏ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadeTable {
    pub num: &'static [f64],
    pub den: &'static [f64],
}

/// Padé approximants fitted over `[0, 2π]`, indexed by `variant - 1`.
///
/// Variant `n` has `n + 2` numerator and `n + 1` denominator coefficients.
pub const PADE: [PadeTable; 13] = [
    // Pade_1
    PadeTable {
        num: &[1.00649052194019, 0.423646282789217, 0.175406661440005],
        den: &[0.306955955676234, 0.0328975279727171],
    },
    // Pade_2
    PadeTable {
        num: &[0.998980252114366, 0.0240176797055886, 0.102524886754552, 0.0317327085938995],
        den: &[-0.150350405960952, 0.112157962910113, 0.00294483072586115],
    },
    // Pade_3
    PadeTable {
        num: &[
            1.00006668638419,
            0.322645945302282,
            0.0860384450810725,
            0.051143347041175,
            0.0153420957423937,
        ],
        den: &[0.157166943736625, 0.0245168267924732, 0.0462567432956417, 0.00175392506101448],
    },
    // Pade_4
    PadeTable {
        num: &[
            0.999996682596798,
            -0.0889915717930786,
            0.147076211695128,
            0.0123471280480147,
            0.00866458140843225,
            0.00204463718201973,
        ],
        den: &[
            -0.255723982020183,
            0.159493904911975,
            -0.0106101311382749,
            0.00784491418150148,
            0.000184273251439305,
        ],
    },
    // Pade_5
    PadeTable {
        num: &[
            0.999998218345888,
            -0.424362176674708,
            0.171875463304611,
            -0.0357487982640122,
            0.00410625374333464,
            -0.000978753693904127,
            -0.000636955605769902,
        ],
        den: &[
            -0.591069429462395,
            0.240083348894323,
            -0.0617593442909405,
            0.0104920694265126,
            -0.00231970889331938,
            -5.65924775627923e-05,
        ],
    },
    // Pade_6
    PadeTable {
        num: &[
            1.0000000012405,
            -0.350251200743747,
            0.229153326540668,
            -0.0205204312544928,
            0.0133231478358294,
            0.0010401274983046,
            0.00048671850792775,
            8.40088474488992e-05,
        ],
        den: &[
            -0.516917882097882,
            0.284751410622371,
            -0.0555622365621819,
            0.0161071584333013,
            -0.000808341017586247,
            0.000381511960690599,
            6.40735447518177e-06,
        ],
    },
    // Pade_7
    PadeTable {
        num: &[
            0.999999995257458,
            -0.543811114837314,
            0.297774393256421,
            -0.0648661921727468,
            0.0174768559302056,
            -0.00151793039097231,
            0.000295750461715408,
            -4.1567697098083e-06,
            -1.62498860684328e-05,
        ],
        den: &[
            -0.710477969437912,
            0.385633880896532,
            -0.110812474410256,
            0.0270500418196004,
            -0.00394602590941703,
            0.000553921270262525,
            -6.65533846723705e-05,
            -1.24656671282763e-06,
        ],
    },
    // Pade_8
    PadeTable {
        num: &[
            1.00000000020126,
            -0.388439115555858,
            0.310223332529737,
            -0.0496321949056331,
            0.0293825301580729,
            -0.000149900084396432,
            0.00139739652490532,
            0.000171592322622253,
            4.94349555930422e-05,
            5.36329658499187e-06,
        ],
        den: &[
            -0.555105771884377,
            0.372185262898829,
            -0.0980736559689507,
            0.036689986163131,
            -0.00440840853967443,
            0.00139722437126806,
            -3.64106868131082e-06,
            2.72315576473091e-05,
            3.80576928768955e-07,
        ],
    },
    // Pade_9
    PadeTable {
        num: &[
            1.00000000054683,
            -0.302517970258141,
            0.216194173804703,
            -0.00911867675112112,
            0.0131923444114312,
            0.00197230469011907,
            0.000583685774943952,
            0.000117061426950459,
            2.16577683514269e-05,
            -4.06436904033371e-06,
            -1.35655741732812e-07,
        ],
        den: &[
            -0.469184609052338,
            0.263835664763448,
            -0.0421256860069538,
            0.0141905686336732,
            0.000171234247175628,
            0.000284037180073895,
            7.23728845968762e-05,
            -3.33925175755566e-06,
            -1.1196042731312e-06,
            -6.10361897619335e-09,
        ],
    },
    // Pade_10
    PadeTable {
        num: &[
            1.00000000069543,
            -0.334954381847524,
            0.229997336203832,
            -0.0170932674073579,
            0.0142286437913579,
            0.00157766182461221,
            0.000555414435408452,
            0.000109241385068583,
            2.04181414663277e-05,
            -4.47936721320148e-06,
            7.20245847805242e-08,
            2.27591359161482e-09,
        ],
        den: &[
            -0.501621014271701,
            0.283044819037831,
            -0.0523102821262626,
            0.0164455383396673,
            -0.000365622576684072,
            0.000304882740985283,
            7.15596032735346e-05,
            -5.64260090297976e-06,
            -7.22847827757772e-07,
            3.16954475149092e-08,
            -4.18523172095159e-11,
        ],
    },
    // Pade_11
    PadeTable {
        num: &[
            1.00000000021134,
            -0.439538511010958,
            0.262071966075091,
            -0.0352260757847662,
            0.0136888861362354,
            0.00119983590894612,
            0.000306132196963262,
            9.3344593984067e-05,
            1.13485236045952e-05,
            -2.19033671564094e-06,
            -1.52303393432862e-07,
            3.29680588537e-08,
            -3.59648926971857e-09,
        ],
        den: &[
            -0.606205166733527,
            0.332550449569891,
            -0.0755002415059252,
            0.0186169006337531,
            -0.000624409536143469,
            0.000110698204767146,
            7.31839474973857e-05,
            -4.17221912299122e-06,
            -1.00985652913037e-06,
            1.15600808535017e-07,
            -7.31093937337407e-09,
            -3.576922099426e-10,
        ],
    },
    // Pade_12
    PadeTable {
        num: &[
            1.00000000034658,
            -0.35765423836608,
            0.220474157851537,
            -0.0143101981637556,
            0.0106882664277003,
            0.00177809831685665,
            0.000425551341246499,
            8.39454668343144e-05,
            1.68918586510378e-05,
            -3.47736023040874e-06,
            1.1564308170262e-07,
            -5.38824115168048e-09,
            2.55400838802905e-09,
            -5.77246087402385e-10,
        ],
        den: &[
            -0.524320887192481,
            0.277305164506462,
            -0.0478782214771677,
            0.0124223110237922,
            0.00037129622072912,
            0.000158246646088704,
            5.24876551697954e-05,
            -1.38557325635002e-06,
            -7.96232034767084e-07,
            8.35464703802028e-09,
            1.1834526426828e-08,
            -1.48873774124982e-09,
            -5.59846037648501e-11,
        ],
    },
    // Pade_13
    PadeTable {
        num: &[
            1.00000000043044,
            -0.341214787680155,
            0.216029315236116,
            -0.0116443516054976,
            0.0108812744435703,
            0.00184089184824533,
            0.000466873470691525,
            8.83178779786945e-05,
            1.82969284264395e-05,
            -3.70984687913519e-06,
            1.15252770559743e-07,
            4.05866020101675e-10,
            1.00682972256747e-09,
            -1.03386709606535e-10,
            2.54165346162395e-11,
        ],
        den: &[
            -0.507881432557414,
            0.27012036160695,
            -0.0445169260696995,
            0.0122182321499095,
            0.00039913233839911,
            0.000190210573213751,
            5.3696821111172e-05,
            -1.69377956737975e-06,
            -7.45889615784955e-07,
            1.5632250659559e-09,
            1.19811786331838e-08,
            -1.3440816876962e-09,
            1.13151579925971e-10,
            1.46210486272321e-12,
        ],
    },
];

/// Hunt (1979), 9-term denominator series:
/// `β² = α² + α / (1 + α Σ HUNT_9[j] αʲ)`.
pub const HUNT_9: [f64; 9] = [
    0.6666666667,
    0.3555,
    0.16084,
    0.0632,
    0.02174,
    0.00654,
    0.00171,
    0.00039,
    0.00011,
];

/// Hunt (1979), 5-term form: `β² = α (α + 1 / Σ HUNT_5[j] αʲ)`.
pub const HUNT_5: [f64; 6] = [1.0, 0.6522, 0.4622, 0.0, 0.0864, 0.0675];

/// Shallow-water expansion `β = √α · √(Σ NIELSEN_SHALLOW[j] αʲ)`.
pub const NIELSEN_SHALLOW: [f64; 4] = [1.0, 1.0 / 3.0, 4.0 / 45.0, 16.0 / 945.0];

/// Switch point between Nielsen's shallow and deep forms.
pub const NIELSEN_SWITCH: f64 = 2.0;

/// Switch point between Wu & Thornton's shallow and deep forms (0.4π).
pub const WU_THORNTON_SWITCH: f64 = 0.4 * std::f64::consts::PI;

/// Switch point between Gilbert's shallow and deep forms.
pub const GILBERT_SWITCH: f64 = 1.0;

/// Exponents `m` of the Yamaguchi & Nonaka tunable bridges
/// `β = α coth(α^(m/2))^(1/m)` (YN1, YN5) and their nested forms (YN2, YN8).
pub const YN1_EXPONENT: f64 = 1.485;
pub const YN2_EXPONENT: f64 = 1.378;
pub const YN5_EXPONENT: f64 = 1.434;
pub const YN8_EXPONENT: f64 = 1.310;

/// Exponent of the exponential bridge `β = α / (1 - e^(-α^(m/2)))^(1/m)` (YN7).
pub const YN7_EXPONENT: f64 = 2.445;

/// Guo (2002) exponent for the same bridge.
pub const GUO_EXPONENT: f64 = 2.4901;

/// Base of the `b^α √α` argument in YN9.
pub const YN9_BASE: f64 = 1.1965;

/// Carvalho_5: `β = α / tanh(b^(α^p) α^q)` with `(b, p, q)`.
pub const CARVALHO_5: [f64; 3] = [1.199315, 1.047086, 0.499947];

/// Carvalho_6: `β = α / tanh(b^(α^p) √α)` with `(b, p)`.
pub const CARVALHO_6: [f64; 2] = [1.1999, 1.045];

/// Carvalho_11: `β = α / tanh(√(b^α α))`.
pub const CARVALHO_11_BASE: f64 = 1.438995;

/// Yu (2014) amplitude of the `sin(acos(·))` correction.
pub const YU_AMPLITUDE: f64 = 0.0527;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pade_tables_have_expected_lengths() {
        for (i, table) in PADE.iter().enumerate() {
            let n = i + 1;
            assert_eq!(table.num.len(), n + 2, "Pade_{n} numerator");
            assert_eq!(table.den.len(), n + 1, "Pade_{n} denominator");
        }
    }

    #[test]
    fn pade_tables_reduce_to_sqrt_alpha_in_shallow_water() {
        // β → √α requires the leading numerator coefficient to be ≈ 1.
        for table in PADE.iter().skip(2) {
            assert!((table.num[0] - 1.0).abs() < 1e-4);
        }
        assert!((PADE[0].num[0] - 1.0).abs() < 1e-2);
    }

    #[test]
    fn hunt_series_starts_with_two_thirds() {
        assert!((HUNT_9[0] - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(HUNT_5[0], 1.0);
    }

    #[test]
    fn nielsen_series_matches_taylor_expansion() {
        // β²/α = 1 + α/3 + 4α²/45 + 16α³/945 + ...
        assert_eq!(NIELSEN_SHALLOW[0], 1.0);
        assert!((NIELSEN_SHALLOW[1] - 1.0 / 3.0).abs() < 1e-15);
        assert!((NIELSEN_SHALLOW[3] * 945.0 - 16.0).abs() < 1e-12);
    }
}
