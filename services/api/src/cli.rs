use crate::infra;
use crate::server;
use clap::{Args, Parser, Subcommand};
use latihan::calculator::{CalculatorInput, ClaimCategory, LevyEstimate};
use latihan::config::AppConfig;
use latihan::error::AppError;
use latihan::seo::{render_sitemap, sitemap_entries};

#[derive(Parser, Debug)]
#[command(
    name = "Latihan Directory",
    about = "Run the Malaysian training provider directory from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Estimate the HRDF levy and claimable amount for a training plan
    Levy(LevyArgs),
    /// Print the sitemap XML for the configured provider dataset
    Sitemap(SitemapArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct LevyArgs {
    /// Number of local employees on payroll
    #[arg(long)]
    employees: u32,
    /// Average monthly basic salary in RM
    #[arg(long)]
    basic_salary: f64,
    /// Average monthly fixed allowance in RM
    #[arg(long, default_value_t = 0.0)]
    fixed_allowance: f64,
    /// Claim scheme: public-program, in-house, overseas, e-learning, certification
    #[arg(long, value_parser = parse_category)]
    category: ClaimCategory,
    /// Number of training days
    #[arg(long, default_value_t = 1)]
    days: u32,
    /// Number of participants attending
    #[arg(long)]
    participants: u32,
    /// Declared course fee in RM
    #[arg(long)]
    course_fee: f64,
    /// Include the meal allowance add-on
    #[arg(long)]
    meals: bool,
    /// Include the accommodation allowance add-on
    #[arg(long)]
    accommodation: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SitemapArgs {
    /// Override the configured site base URL
    #[arg(long)]
    base_url: Option<String>,
}

fn parse_category(raw: &str) -> Result<ClaimCategory, String> {
    ClaimCategory::from_slug(raw).ok_or_else(|| format!("unknown claim scheme '{raw}'"))
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Levy(args) => run_levy(args),
        Command::Sitemap(args) => run_sitemap(args),
    }
}

fn run_levy(args: LevyArgs) -> Result<(), AppError> {
    let input = CalculatorInput {
        employees: args.employees,
        average_basic_salary: args.basic_salary,
        average_fixed_allowance: args.fixed_allowance,
        category: args.category,
        training_days: args.days,
        participants: args.participants,
        course_fee: args.course_fee,
        include_meals: args.meals,
        include_accommodation: args.accommodation,
    };
    let estimate = LevyEstimate::compute(&input);

    println!("HRDF estimate for a {}", args.category.label());
    println!("  Monthly levy:          RM {:>12.2}", estimate.monthly_levy);
    println!("  Annual levy:           RM {:>12.2}", estimate.annual_levy);
    println!(
        "  Claimable course fee:  RM {:>12.2}",
        estimate.claimable_course_fee
    );
    println!(
        "  Claimable allowance:   RM {:>12.2}",
        estimate.claimable_allowance
    );
    println!(
        "  Total claimable:       RM {:>12.2}",
        estimate.total_claimable
    );
    println!(
        "  Net after 4% fee:      RM {:>12.2}",
        estimate.net_after_service_fee
    );

    Ok(())
}

fn run_sitemap(args: SitemapArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let base_url = args.base_url.unwrap_or_else(|| config.site.base_url.clone());
    let store = infra::build_store(&config)?;
    let entries = sitemap_entries(&base_url, store.providers());
    print!("{}", render_sitemap(&entries));
    Ok(())
}
