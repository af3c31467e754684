//! Zento market viewer
//!
//! Command-line front end for the read-only market views: list markets,
//! inspect one market, platform totals, trades and positions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use zento_markets::config::{
    CLIENT_ID_ENV, CONTRACT_ADDRESS_ENV, FALLBACK_RPC_URL_ENV, RPC_URL_ENV,
};
use zento_markets::models::{MarketDetails, MarketSummary, Trade};
use zento_markets::{
    format_price, format_usdt, MarketConfig, MarketContract, MarketViews, BSC_TESTNET,
    DEFAULT_HISTORY_LIMIT, DEFAULT_TRADE_LIMIT,
};

/// Zento prediction market viewer.
#[derive(Parser)]
#[command(name = "zento")]
#[command(about = "Read Zento prediction markets from chain", long_about = None)]
struct Cli {
    /// Application client id used for the default RPC gateway
    #[arg(long, env = CLIENT_ID_ENV, default_value = "", hide_env_values = true)]
    client_id: String,

    /// Market contract address
    #[arg(long, env = CONTRACT_ADDRESS_ENV)]
    contract: Option<String>,

    /// Primary RPC endpoint (overrides the client-scoped default)
    #[arg(long, env = RPC_URL_ENV)]
    rpc_url: Option<String>,

    /// Public RPC endpoint tried after the primary one
    #[arg(long, env = FALLBACK_RPC_URL_ENV, default_value = BSC_TESTNET.fallback_rpc)]
    fallback_rpc_url: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all market ids
    Ids,

    /// List summaries of all markets
    Markets,

    /// Show full details of one market
    Market {
        /// Market id
        id: u64,
    },

    /// Show the listing summary of one market
    Summary {
        /// Market id
        id: u64,
    },

    /// Show platform-wide totals
    Stats,

    /// Show pool reserves of a market
    Pool {
        /// Market id
        id: u64,
    },

    /// Show trading analytics of a market
    Analytics {
        /// Market id
        id: u64,
    },

    /// Show the latest trades of a market
    Trades {
        /// Market id
        id: u64,

        /// Maximum number of trades
        #[arg(short, long, default_value_t = DEFAULT_TRADE_LIMIT)]
        limit: u64,
    },

    /// Show a user's trades, across all markets unless one is given
    History {
        /// Trader's wallet address
        user: String,

        /// Restrict to one market
        #[arg(short, long)]
        market: Option<u64>,

        /// Trades read per market
        #[arg(short, long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: u64,
    },

    /// Show a user's position in a market
    Position {
        /// Trader's wallet address
        user: String,

        /// Market id
        id: u64,
    },

    /// Show the market creation fee
    Fee,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = MarketConfig {
        client_id: cli.client_id,
        contract_address: cli.contract,
        rpc_url: cli.rpc_url,
        fallback_rpc_url: cli.fallback_rpc_url,
    };
    let contract =
        MarketContract::from_config(&config).context("Failed to build market contract handle")?;

    info!(
        address = %contract.address(),
        chain = contract.chain().name,
        endpoints = contract.endpoints().len(),
        "Connected market contract"
    );

    let views = MarketViews::connect(&contract);
    let json = cli.json;

    match cli.command {
        Commands::Ids => {
            let ids = views.all_market_ids().await;
            if json {
                return print_json(&ids);
            }
            if ids.is_empty() {
                println!("No markets found.");
            }
            for id in ids {
                println!("{}", id);
            }
        }

        Commands::Markets => {
            let summaries = views.all_market_summaries().await;
            if json {
                return print_json(&summaries);
            }
            if summaries.is_empty() {
                println!("No markets found.");
                return Ok(());
            }

            println!(
                "\n{:<6} {:<36} {:<9} {:>8} {:>8} {:>14} {:>10}",
                "ID", "TITLE", "STATUS", "YES", "NO", "TVL", "LEFT"
            );
            println!("{}", "-".repeat(97));
            for s in &summaries {
                print_summary_row(s);
            }
        }

        Commands::Market { id } => match views.market_details(id).await {
            Some(details) if json => return print_json(&details),
            Some(details) => print_details(&details),
            None => println!("Market {} unavailable.", id),
        },

        Commands::Summary { id } => match views.market_summary(id).await {
            Some(summary) if json => return print_json(&summary),
            Some(summary) => {
                println!(
                    "\n{:<6} {:<36} {:<9} {:>8} {:>8} {:>14} {:>10}",
                    "ID", "TITLE", "STATUS", "YES", "NO", "TVL", "LEFT"
                );
                println!("{}", "-".repeat(97));
                print_summary_row(&summary);
            }
            None => println!("Market {} unavailable.", id),
        },

        Commands::Stats => {
            let stats = views.platform_stats().await;
            if json {
                return print_json(&stats);
            }
            println!("\n=== Platform ===");
            println!("Total Markets:  {}", stats.total_markets);
            println!("Active Markets: {}", stats.active_markets);
            println!(
                "Total TVL:      {}",
                format_usdt(&format!("{:.0}", stats.total_tvl))
            );
        }

        Commands::Pool { id } => match views.market_pool_info(id).await {
            Some(pool) if json => return print_json(&pool),
            Some(pool) => {
                println!("\n=== Pool: market {} ===", id);
                println!("Yes Reserve:        {}", pool.yes_reserve);
                println!("No Reserve:         {}", pool.no_reserve);
                println!("LP Tokens:          {}", pool.total_lp_tokens);
                println!("Yes Shares:         {}", pool.total_yes_shares);
                println!("No Shares:          {}", pool.total_no_shares);
                println!("Global Yes Alloc:   {}", pool.global_yes_allocation);
                println!("Global No Alloc:    {}", pool.global_no_allocation);
            }
            None => println!("Pool info for market {} unavailable.", id),
        },

        Commands::Analytics { id } => match views.market_analytics(id).await {
            Some(a) if json => return print_json(&a),
            Some(a) => {
                println!("\n=== Analytics: market {} ===", id);
                println!("Total Volume:     {}", format_usdt(&a.total_volume));
                println!("24h Volume:       {}", format_usdt(&a.last_24h_volume));
                println!("Liquidity Volume: {}", format_usdt(&a.liquidity_volume));
                println!("Total Fees:       {}", format_usdt(&a.total_fees));
                println!("Total Trades:     {}", a.total_trades);
                println!("Unique Traders:   {}", a.unique_trader_count);
            }
            None => println!("Analytics for market {} unavailable.", id),
        },

        Commands::Trades { id, limit } => {
            let trades = views.latest_trades(id, limit).await;
            if json {
                return print_json(&trades);
            }
            print_trades(&trades);
        }

        Commands::History {
            user,
            market,
            limit,
        } => {
            let trades = views.user_trade_history(&user, market, limit).await;
            if json {
                return print_json(&trades);
            }
            print_trades(&trades);
        }

        Commands::Position { user, id } => match views.user_position_details(&user, id).await {
            Some(position) if json => return print_json(&position),
            Some(position) if !position.is_open() => {
                println!("{} holds no shares in market {}.", position.user, id)
            }
            Some(position) => {
                println!("\n=== Position: {} in market {} ===", position.user, id);
                println!("Outcome:   {}", outcome_label(position.outcome));
                println!("Shares:    {}", position.shares);
                println!("Avg Price: {}", format_price(&position.avg_price));
                println!("Updated:   {}", position.timestamp);
            }
            None => println!("Position unavailable."),
        },

        Commands::Fee => match views.market_creation_fee().await {
            Some(fee) if json => return print_json(&fee),
            Some(fee) => println!("Market creation fee: {}", format_usdt(&fee)),
            None => println!("Market creation fee unavailable."),
        },
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}

fn print_summary_row(s: &MarketSummary) {
    println!(
        "{:<6} {:<36} {:<9} {:>8} {:>8} {:>14} {:>10}",
        s.id,
        truncate(&s.title, 34),
        s.status,
        format_price(&s.yes_price),
        format_price(&s.no_price),
        format_usdt(&s.total_value_locked),
        s.time_left
    );
}

fn print_details(d: &MarketDetails) {
    println!("\n=== Market {}: {} ===", d.id, d.title);
    println!("{}", d.description);

    println!("\n--- Lifecycle ---");
    println!("Tier:       {}", d.tier);
    println!("End Time:   {}", d.end_time);
    println!("Resolved:   {}", if d.resolved { "Yes" } else { "No" });
    if let Some(outcome) = d.outcome {
        println!("Outcome:    {}", outcome_label(outcome));
    }
    println!("Creator:    {}", d.creator);
    println!("Oracle:     {}", d.oracle);

    println!("\n--- Prices ---");
    println!("Yes:        {}", format_price(&d.yes_price));
    println!("No:         {}", format_price(&d.no_price));

    println!("\n--- Pool ---");
    println!("TVL:        {}", format_usdt(&d.tvl));
    println!("Yes Reserve: {}", d.yes_reserve);
    println!("No Reserve: {}", d.no_reserve);
    println!("LP Tokens:  {}", d.total_lp_tokens);

    println!("\n--- Activity ---");
    println!("Volume:     {}", format_usdt(&d.total_volume));
    println!("24h Volume: {}", format_usdt(&d.last_24h_volume));
    println!("Fees:       {}", format_usdt(&d.total_fees));
    println!("Trades:     {}", d.total_trades);
    println!("Traders:    {}", d.participant_count);
}

fn print_trades(trades: &[Trade]) {
    if trades.is_empty() {
        println!("No trades found.");
        return;
    }

    println!(
        "\n{:<44} {:<4} {:>12} {:>8} {:>12}",
        "TRADER", "SIDE", "SHARES", "PRICE", "TIMESTAMP"
    );
    println!("{}", "-".repeat(84));
    for t in trades {
        println!(
            "{:<44} {:<4} {:>12} {:>8} {:>12}",
            t.trader,
            outcome_label(t.outcome),
            t.shares,
            format_price(&t.price),
            t.timestamp
        );
    }
}

fn outcome_label(code: u8) -> &'static str {
    zento_markets::models::Outcome::from_code(code)
        .map(|o| o.as_str())
        .unwrap_or("-")
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
