pub mod category;
pub mod errors;
pub mod noise;
pub mod params;
pub mod results;
pub mod rng;
pub mod shapes;
pub mod table;
pub mod utils;
pub mod writers;

pub use category::{random_value, random_value_for_label, Channel, Metric};
pub use errors::GenerationError;
pub use noise::{
    inject_empty_cells, inject_wrong_types, CellPos, NoiseProfile, WrongTypeTarget,
    CAMPAIGN_DIVISOR, DEFAULT_DIVISOR,
};
pub use params::{CampaignParams, LongColumn, LongParams, NoiseParams, WideParams};
pub use results::{Generated, GenerationReport, NoiseSummary};
pub use rng::RngFactory;
pub use shapes::{
    build_campaign_table, generate, generate_campaigns, generate_long, generate_wide, Shape,
    ShapeParams,
};
pub use table::{CellValue, ColumnKey, Table};
pub use writers::{CsvWriter, OutputFormat, SheetWriter, XlsxWriter};

pub type Result<T> = std::result::Result<T, GenerationError>;
