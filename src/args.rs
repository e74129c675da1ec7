use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::comparison::FeatureUniverse;
use crate::web::PageSettings;

#[derive(Parser, Clone, Debug)]
#[command(name = "pricing-page-server", version, about = "Serve the pricing page")]
pub struct ServerArgs {
    /// Address to listen on
    #[arg(long, env = "PRICING_PAGE_ADDR", default_value = "0.0.0.0:8080")]
    pub addr: SocketAddr,

    /// Which feature labels become rows of the comparison table
    #[arg(
        long,
        env = "PRICING_PAGE_COMPARISON_ROWS",
        value_enum,
        default_value_t = FeatureUniverse::UnionOfAll
    )]
    pub comparison_rows: FeatureUniverse,
}

impl ServerArgs {
    pub fn page_settings(&self) -> PageSettings {
        PageSettings {
            universe: self.comparison_rows,
            ..PageSettings::default()
        }
    }
}

#[derive(Parser, Clone, Debug)]
#[command(name = "export_landing", version, about = "Write the pricing page as static HTML")]
pub struct ExportArgs {
    /// Directory that receives index.html
    #[arg(long, env = "PRICING_PAGE_EXPORT_DIR", default_value = "landing-page")]
    pub out_dir: PathBuf,
}
