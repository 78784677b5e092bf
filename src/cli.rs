//! Command line interface.

use crate::config::Config;
use crate::input::{parse_request_arg, read_plan_file};
use crate::models::{Cidr, SubnetRequest};
use crate::output::{render, OutputFormat};
use crate::processing::{plan_with, summarize, validate, Placement};
use clap::Parser;
use colored::Colorize;
use std::error::Error;

/// Plan VLSM subnets for a base IPv4 network
#[derive(Parser, Debug, Default)]
#[command(name = "vlsm-planner", version)]
pub struct Cli {
    /// Base network, e.g. 192.168.1.0/24. May be left out when the plan
    /// file names one, the first argument is then read as a subnet.
    pub network: Option<String>,

    /// Subnets as NAME=HOSTS, NAME:HOSTS or just HOSTS
    pub subnets: Vec<String>,

    /// JSON plan file with "network" and "subnets"
    #[arg(short, long)]
    pub file: Option<String>,

    /// Output format: table, csv or json
    #[arg(short = 'o', long)]
    pub format: Option<OutputFormat>,

    /// Round each block up to a boundary of its own size
    #[arg(long)]
    pub aligned: bool,

    /// Only check that NETWORK is valid CIDR notation
    #[arg(long)]
    pub check: bool,
}

/// Run the command and return the text to print on stdout.
pub fn run(cli: Cli, config: &Config) -> Result<String, Box<dyn Error>> {
    log::info!("#Start run() {:?}", cli);

    if cli.check {
        let network = cli.network.as_deref().ok_or("--check needs a NETWORK")?;
        return if validate(network) {
            Ok(format!("{network} {}\n", "valid".green()))
        } else {
            Err(format!("{network} is not a valid IPv4 network").into())
        };
    }

    let (file_network, mut requests) = match &cli.file {
        Some(file) => {
            let plan_file = read_plan_file(file)?;
            (plan_file.network, plan_file.subnets)
        }
        None => (None, Vec::new()),
    };

    let (cli_network, subnet_args) =
        split_network_arg(cli.network, cli.subnets, file_network.is_some());
    let network = cli_network
        .or(file_network)
        .ok_or("No base network given, pass NETWORK or a plan file with \"network\"")?;
    let network = network.trim().to_string();

    for arg in &subnet_args {
        let request = parse_request_arg(arg, requests.len())?;
        requests.push(request);
    }
    if requests.is_empty() {
        log::warn!("No subnets requested for {network}");
    }

    let placement = if cli.aligned {
        Placement::Aligned
    } else {
        config.placement
    };
    let format = cli.format.unwrap_or(config.format);

    let output = plan_and_render(&network, &requests, placement, format)?;
    log::info!("#End run()");
    Ok(output)
}

/// With a file network present, a first positional that is not CIDR text
/// is a subnet row.
fn split_network_arg(
    network: Option<String>,
    mut subnets: Vec<String>,
    file_has_network: bool,
) -> (Option<String>, Vec<String>) {
    match network {
        Some(arg) if file_has_network && !validate(arg.trim()) => {
            log::debug!("'{arg}' is not a network, reading it as a subnet");
            subnets.insert(0, arg);
            (None, subnets)
        }
        other => (other, subnets),
    }
}

fn plan_and_render(
    network: &str,
    requests: &[SubnetRequest],
    placement: Placement,
    format: OutputFormat,
) -> Result<String, Box<dyn Error>> {
    log::debug!(
        "plan network={network} subnets={} placement={placement:?}",
        requests.len()
    );
    let allocations = plan_with(network, requests, placement)?;
    let summary = summarize(Cidr::new(network)?, &allocations);

    if !summary.fits_in_base {
        log::warn!(
            "Plan for {network} uses {} addresses and extends past {}",
            summary.allocated_addresses,
            summary.base.broadcast()
        );
    }
    for a in &allocations {
        log::trace!("{} -> {}", a.name, a.cidr());
    }

    render(format, &allocations, &summary)
}
