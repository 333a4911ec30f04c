//! Pixur Client - command line access to a Pixur gallery
//!
//! Lists index pages, shows single pics and uploads new ones.

use clap::{Parser, Subcommand};
use pixur_client::{CacheProvider, ClientConfig, PicFile, PicId, PicService};
use std::path::PathBuf;
use std::time::Duration;

/// Pixur gallery client
#[derive(Parser, Debug)]
#[command(name = "pixur_client")]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the Pixur backend
    #[arg(long, default_value = pixur_client::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// XSRF token to send with uploads
    #[arg(long)]
    xsrf_token: Option<String>,

    /// Request timeout in seconds (default: no explicit timeout)
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print index pages, one JSON pic per line
    Index {
        /// Pic ID to start from (default: home page)
        #[arg(long)]
        start: Option<PicId>,

        /// Number of pages to walk
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },
    /// Print a single pic
    Show {
        /// Pic ID to look up
        id: PicId,
    },
    /// Upload a pic from a local file and/or a remote URL
    Upload {
        /// Local file to upload
        #[arg(long)]
        file: Option<PathBuf>,

        /// Remote URL for the server to fetch
        #[arg(long)]
        url: Option<String>,
    },
}

impl Args {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(&self.base_url);
        if let Some(token) = &self.xsrf_token {
            config = config.with_xsrf_token(token.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let caches = CacheProvider::new();

    let service = match PicService::new(args.client_config(), &caches) {
        Ok(service) => service,
        Err(e) => {
            log::error!("Failed to create pic service: {}", e);
            std::process::exit(1);
        }
    };

    let result = match args.command {
        Command::Index { start, pages } => print_index(&service, start, pages).await,
        Command::Show { id } => print_pic(&service, &id).await,
        Command::Upload { file, url } => upload(&service, file, url).await,
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Walk `pages` index pages, using the last pic of each page as the next cursor
async fn print_index(
    service: &PicService,
    start: Option<PicId>,
    pages: usize,
) -> pixur_client::Result<()> {
    let mut cursor = start;
    for page_number in 0..pages {
        let page = service.get(cursor.as_ref()).await?;
        log::info!("Page {}: {} pics", page_number + 1, page.len());

        for pic in &page {
            println!("{}", serde_json::to_string(pic)?);
        }

        match page.last() {
            Some(last) => cursor = Some(last.id.clone()),
            None => break,
        }
    }
    Ok(())
}

async fn print_pic(service: &PicService, id: &PicId) -> pixur_client::Result<()> {
    let pic = service.get_single(id).await?;
    println!("{}", serde_json::to_string_pretty(&pic)?);
    Ok(())
}

async fn upload(
    service: &PicService,
    file: Option<PathBuf>,
    url: Option<String>,
) -> pixur_client::Result<()> {
    let file = match file {
        Some(path) => Some(PicFile::from_path(&path).await?),
        None => None,
    };

    let response = service.create(file, url.as_deref()).await?;
    println!("{}", response.status);
    if !response.body.is_empty() {
        println!("{}", response.body);
    }
    Ok(())
}
