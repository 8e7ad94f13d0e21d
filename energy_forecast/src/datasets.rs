//! Built-in monthly energy consumption tables
//!
//! Consumption per region in Wh/month. The historical tables cover
//! January 2021 to December 2023; the observed tables cover 2024 and are
//! used to score the one-year-ahead forecast.

use crate::data::{ConsumptionData, MonthlySeries, Region};
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;

/// Seasonal period of the monthly tables
pub const MONTHS_PER_YEAR: usize = 12;

const NORTE_HISTORY: [f64; 36] = [
    // 2021
    829_320.0, 798_266.0, 811_549.0, 863_586.0, 857_418.0, 902_817.0,
    864_643.0, 921_609.0, 988_246.0, 975_713.0, 958_134.0, 946_016.0,
    // 2022
    878_646.0, 829_751.0, 886_754.0, 860_992.0, 899_520.0, 899_714.0,
    923_014.0, 995_812.0, 1_032_570.0, 1_044_150.0, 982_073.0, 989_692.0,
    // 2023
    908_625.0, 864_397.0, 948_603.0, 986_381.0, 999_291.0, 1_044_383.0,
    1_036_735.0, 1_123_220.0, 1_186_719.0, 1_222_328.0, 1_235_789.0, 1_171_554.0,
];

const NORDESTE_HISTORY: [f64; 36] = [
    // 2021
    2_763_245.0, 2_623_494.0, 2_731_576.0, 2_778_757.0, 2_541_573.0, 2_567_474.0,
    2_478_002.0, 2_462_687.0, 2_660_694.0, 2_679_149.0, 2_668_151.0, 2_831_641.0,
    // 2022
    2_687_342.0, 2_575_410.0, 2_805_342.0, 2_628_482.0, 2_676_007.0, 2_469_464.0,
    2_467_219.0, 2_492_009.0, 2_614_394.0, 2_653_200.0, 2_807_406.0, 2_839_078.0,
    // 2023
    2_805_490.0, 2_778_417.0, 2_861_484.0, 2_795_542.0, 2_923_572.0, 2_711_658.0,
    2_611_503.0, 2_703_657.0, 2_874_947.0, 2_899_670.0, 3_119_037.0, 3_097_684.0,
];

const SUDESTE_HISTORY: [f64; 36] = [
    // 2021
    6_604_401.0, 6_235_408.0, 6_357_289.0, 6_390_169.0, 5_526_107.0, 5_549_613.0,
    5_404_190.0, 5_472_932.0, 5_975_072.0, 5_758_807.0, 5_674_137.0, 6_024_669.0,
    // 2022
    5_992_623.0, 6_037_501.0, 6_641_314.0, 6_255_459.0, 5_701_319.0, 5_493_254.0,
    5_538_689.0, 5_545_784.0, 5_694_638.0, 5_755_198.0, 5_951_934.0, 6_316_138.0,
    // 2023
    5_855_814.0, 6_333_221.0, 6_529_244.0, 6_888_977.0, 5_936_009.0, 5_838_541.0,
    5_751_791.0, 5_929_765.0, 6_212_348.0, 6_607_791.0, 6_880_970.0, 7_080_334.0,
];

const SUL_HISTORY: [f64; 36] = [
    // 2021
    2_273_434.0, 2_119_585.0, 2_205_119.0, 2_122_892.0, 1_881_304.0, 1_873_584.0,
    1_964_097.0, 1_982_015.0, 1_836_742.0, 1_878_103.0, 1_945_066.0, 2_082_091.0,
    // 2022
    2_347_818.0, 2_348_276.0, 2_392_262.0, 1_963_868.0, 1_873_783.0, 1_994_035.0,
    1_988_103.0, 1_948_832.0, 1_980_822.0, 1_936_082.0, 2_004_807.0, 2_202_811.0,
    // 2023
    2_347_985.0, 2_605_102.0, 2_503_873.0, 2_354_968.0, 2_049_470.0, 2_064_325.0,
    2_112_131.0, 2_062_813.0, 2_052_123.0, 2_210_632.0, 2_176_246.0, 2_446_622.0,
];

const CENTRO_OESTE_HISTORY: [f64; 36] = [
    // 2021
    1_183_630.0, 1_099_086.0, 1_150_854.0, 1_203_491.0, 1_067_692.0, 1_119_338.0,
    1_000_703.0, 1_010_658.0, 1_250_428.0, 1_260_246.0, 1_146_710.0, 1_214_616.0,
    // 2022
    1_157_091.0, 1_128_228.0, 1_194_911.0, 1_163_440.0, 1_126_353.0, 1_059_951.0,
    1_058_762.0, 1_093_208.0, 1_182_829.0, 1_216_586.0, 1_203_484.0, 1_268_871.0,
    // 2023
    1_152_181.0, 1_149_605.0, 1_223_054.0, 1_227_059.0, 1_170_399.0, 1_129_768.0,
    1_071_272.0, 1_179_502.0, 1_318_676.0, 1_479_546.0, 1_529_415.0, 1_522_554.0,
];

const NORTE_2024: [f64; 12] = [
    // 2024
    1_122_689.0, 1_087_908.0, 1_084_094.0, 1_117_881.0, 1_136_247.0, 1_117_165.0,
    1_143_776.0, 1_200_943.0, 1_274_834.0, 1_320_869.0, 1_258_922.0, 1_222_897.0,
];

const NORDESTE_2024: [f64; 12] = [
    // 2024
    3_168_933.0, 3_098_896.0, 3_082_552.0, 3_153_214.0, 3_106_169.0, 2_997_394.0,
    2_757_151.0, 2_839_556.0, 2_954_096.0, 2_966_217.0, 3_170_640.0, 3_244_577.0,
];

const SUDESTE_2024: [f64; 12] = [
    // 2024
    7_069_136.0, 6_886_915.0, 7_260_103.0, 6_721_233.0, 6_872_360.0, 6_358_441.0,
    6_056_893.0, 6_140_575.0, 6_386_658.0, 6_932_033.0, 6_532_052.0, 6_859_871.0,
];

const SUL_2024: [f64; 12] = [
    // 2024
    2_703_760.0, 2_770_449.0, 2_750_929.0, 2_572_691.0, 2_330_962.0, 2_264_676.0,
    2_239_193.0, 2_334_292.0, 2_215_836.0, 2_278_504.0, 2_387_957.0, 2_432_536.0,
];

const CENTRO_OESTE_2024: [f64; 12] = [
    // 2024
    1_381_913.0, 1_353_531.0, 1_422_776.0, 1_382_255.0, 1_396_686.0, 1_232_245.0,
    1_194_277.0, 1_229_234.0, 1_377_488.0, 1_581_633.0, 1_443_059.0, 1_470_025.0,
];

fn month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ForecastError::DataError(format!("Invalid month {}-{}", year, month)))
}

/// Historical consumption of `region`, January 2021 to December 2023
pub fn historical(region: Region) -> Result<MonthlySeries> {
    let values: &[f64] = match region {
        Region::Norte => &NORTE_HISTORY,
        Region::Nordeste => &NORDESTE_HISTORY,
        Region::Sudeste => &SUDESTE_HISTORY,
        Region::Sul => &SUL_HISTORY,
        Region::CentroOeste => &CENTRO_OESTE_HISTORY,
    };
    MonthlySeries::new(region.name(), month(2021, 1)?, values.to_vec())
}

/// Observed consumption of `region` during 2024
pub fn observed_2024(region: Region) -> Result<MonthlySeries> {
    let values: &[f64] = match region {
        Region::Norte => &NORTE_2024,
        Region::Nordeste => &NORDESTE_2024,
        Region::Sudeste => &SUDESTE_2024,
        Region::Sul => &SUL_2024,
        Region::CentroOeste => &CENTRO_OESTE_2024,
    };
    MonthlySeries::new(region.name(), month(2024, 1)?, values.to_vec())
}

/// Historical tables of all regions
pub fn historical_dataset() -> Result<ConsumptionData> {
    let series = Region::ALL
        .iter()
        .map(|&r| historical(r))
        .collect::<Result<Vec<_>>>()?;
    ConsumptionData::new(series)
}

/// Observed 2024 tables of all regions
pub fn observed_2024_dataset() -> Result<ConsumptionData> {
    let series = Region::ALL
        .iter()
        .map(|&r| observed_2024(r))
        .collect::<Result<Vec<_>>>()?;
    ConsumptionData::new(series)
}
