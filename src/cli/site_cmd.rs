use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum SiteCmd {
    #[command(about = "Register a new site and print its id")]
    Add {
        #[arg(long, help = "Site name")]
        name: String,
        #[arg(long, help = "Person responsible for the site")]
        responsible: String,
        #[arg(long = "start-date", value_name = "DATE")]
        start_date: String,
        #[arg(long = "expected-end-date", value_name = "DATE")]
        expected_end_date: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(
            long,
            value_name = "DEG",
            requires = "lon",
            allow_negative_numbers = true,
            help = "Latitude of the site"
        )]
        lat: Option<f64>,
        #[arg(
            long,
            value_name = "DEG",
            requires = "lat",
            allow_negative_numbers = true,
            help = "Longitude of the site"
        )]
        lon: Option<f64>,
        #[arg(long, value_name = "REF", help = "Opaque reference to a stored photo")]
        photo: Option<String>,
    },
    #[command(about = "List all sites in insertion order")]
    List,
    #[command(about = "Show one site")]
    Show {
        #[arg(value_name = "SITE_ID")]
        id: String,
    },
    #[command(
        about = "List sites with inspection counts",
        long_about = "Print every site together with its number of inspections and whether any of them is on schedule or delayed."
    )]
    Summary,
    #[command(about = "Change fields of an existing site (only the given ones)")]
    Update {
        #[arg(value_name = "SITE_ID")]
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        responsible: Option<String>,
        #[arg(long = "start-date", value_name = "DATE")]
        start_date: Option<String>,
        #[arg(long = "expected-end-date", value_name = "DATE")]
        expected_end_date: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(
            long,
            value_name = "DEG",
            requires = "lon",
            allow_negative_numbers = true
        )]
        lat: Option<f64>,
        #[arg(
            long,
            value_name = "DEG",
            requires = "lat",
            allow_negative_numbers = true
        )]
        lon: Option<f64>,
        #[arg(long, conflicts_with = "lat", help = "Remove the stored location")]
        clear_location: bool,
        #[arg(long, value_name = "REF")]
        photo: Option<String>,
        #[arg(long, conflicts_with = "photo", help = "Remove the stored photo reference")]
        clear_photo: bool,
    },
    #[command(about = "Delete a site and all of its inspections")]
    Delete {
        #[arg(value_name = "SITE_ID")]
        id: String,
    },
}
