use cardxfer::application::transfer::TransferService;
use cardxfer::config::BankConfig;
use cardxfer::domain::endpoint::OwnershipCheck;
use cardxfer::infrastructure::in_memory::{InMemoryCardDirectory, InMemoryTransactionLog};
use cardxfer::interfaces::csv::card_reader::CardReader;
use cardxfer::interfaces::csv::card_writer::CardWriter;
use cardxfer::interfaces::csv::transaction_writer::TransactionWriter;
use cardxfer::interfaces::csv::transfer_reader::TransferReader;
use cardxfer::logging::init_cli_logger;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Cards CSV file (id,issuer,balance,currency,number,icon)
    cards: PathBuf,

    /// Transfer requests CSV file (from,to,amount)
    transfers: PathBuf,

    /// Bank configuration JSON. Built-in tariff is used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Treat unknown cards carrying the bank's prefix as third-party cards.
    #[arg(long)]
    lenient: bool,

    /// Also write the transaction log as CSV to this path.
    #[arg(long)]
    transactions_out: Option<PathBuf>,

    /// Log every priced transfer.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => BankConfig::load(path).into_diagnostic()?,
        None => BankConfig::default(),
    };
    if cli.lenient {
        config.ownership_check = OwnershipCheck::Lenient;
    }
    info!(bank = %config.bank_name, prefix = %config.issuer_prefix, "Loaded bank configuration");

    let cards = CardReader::new(File::open(&cli.cards).into_diagnostic()?)
        .cards()
        .into_diagnostic()?;
    let directory = InMemoryCardDirectory::with_cards(config.issuer_prefix.clone(), cards);

    let service = TransferService::new(
        Box::new(directory),
        Box::new(InMemoryTransactionLog::new()),
        config.commissions,
    )
    .with_ownership_check(config.ownership_check);

    let file = File::open(&cli.transfers).into_diagnostic()?;
    for request in TransferReader::new(file).requests() {
        match request {
            Ok(request) => {
                if let Err(e) = service.execute(&request) {
                    warn!(from = %request.from, to = %request.to, total = %e.total(), "Transfer rejected: {}", e);
                }
            }
            Err(e) => {
                error!("Error reading transfer request: {}", e);
            }
        }
    }

    let stdout = io::stdout();
    let mut writer = CardWriter::new(stdout.lock());
    writer
        .write_cards(service.cards().all_cards())
        .into_diagnostic()?;

    if let Some(path) = &cli.transactions_out {
        let mut writer = TransactionWriter::new(File::create(path).into_diagnostic()?);
        writer
            .write_records(&service.transactions().records())
            .into_diagnostic()?;
    }

    Ok(())
}
