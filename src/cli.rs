//! Command line shell around the calculator.

use crate::models::Allocation;
use crate::output::{allocation_report, allocations_print_csv, network_info_report, to_json};
use crate::processing::{
    allocate_vlsm, check_parent_prefix, compute_network_info, normalize_address,
    parse_host_demand_list, parse_mask_spec,
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::error::Error;

#[derive(Parser, Debug)]
#[command(name = "subnet-vlsm", version, about = "IPv4 subnet and VLSM calculator")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Network, broadcast, usable range and host count of an address
    Info {
        /// Host address, e.g. 192.168.0.1
        address: String,
        /// Dotted-decimal subnet mask, e.g. 255.255.255.0
        mask: String,
    },
    /// Allocate one subnet per host requirement inside a parent block
    Vlsm {
        /// Base address; partial (10.1) and binary-octet forms are accepted
        address: String,
        /// Parent mask as dotted-decimal, /N or N
        mask: String,
        /// Host requirements separated by commas, e.g. "100,50,20"
        hosts: String,
        #[arg(long, help = "Output CSV rows")]
        csv: bool,
    },
}

/// Execute a parsed command line.
pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Info { address, mask } => {
            log::info!("#Start info({address}, {mask})");
            let info = compute_network_info(&address, &mask)?;
            if cli.json {
                println!("{}", to_json(&info)?);
            } else {
                println!("{}", network_info_report(&info));
            }
        }
        Commands::Vlsm {
            address,
            mask,
            hosts,
            csv,
        } => {
            log::info!("#Start vlsm({address}, {mask}, {hosts})");
            let base = normalize_address(&address)?;
            let parent_prefix = parse_mask_spec(&mask)?;
            let demands = parse_host_demand_list(&hosts)?;
            if let Err(e) = check_parent_prefix(parent_prefix) {
                log::warn!("{e}");
            }

            let plan = allocate_vlsm(&base, parent_prefix, &demands);
            print_plan(&plan, cli.json, csv)?;

            if plan.len() < demands.len() {
                eprintln!(
                    "#{}# {} of {} host requirements do not fit in {base}/{parent_prefix}",
                    "NOTE".on_red(),
                    demands.len() - plan.len(),
                    demands.len()
                );
            }
        }
    }

    log::info!("#End run()");
    Ok(())
}

fn print_plan(plan: &[Allocation], json: bool, csv: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", to_json(plan)?);
    } else if csv {
        allocations_print_csv(plan);
    } else {
        println!("{}", allocation_report(plan));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_info_command() {
        let cli = Cli::try_parse_from(["subnet-vlsm", "info", "192.168.1.10", "255.255.255.0"])
            .unwrap();
        assert!(!cli.json);
        assert_eq!(
            cli.command,
            Commands::Info {
                address: "192.168.1.10".to_string(),
                mask: "255.255.255.0".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_vlsm_command() {
        let cli = Cli::try_parse_from([
            "subnet-vlsm",
            "--json",
            "vlsm",
            "192.168.1",
            "/24",
            "100, 20,50",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(
            cli.command,
            Commands::Vlsm {
                address: "192.168.1".to_string(),
                mask: "/24".to_string(),
                hosts: "100, 20,50".to_string(),
                csv: false,
            }
        );
    }

    #[test]
    fn test_parse_requires_arguments() {
        assert!(Cli::try_parse_from(["subnet-vlsm", "info", "192.168.1.10"]).is_err());
        assert!(Cli::try_parse_from(["subnet-vlsm"]).is_err());
    }

    #[test]
    fn test_run_reports_bad_input() {
        let cli = Cli::try_parse_from(["subnet-vlsm", "vlsm", "10.0.0.0", "/24", "100,abc"])
            .unwrap();
        let err = run(cli).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input for host requirements: 'abc'");

        let cli = Cli::try_parse_from(["subnet-vlsm", "info", "10.0.0.1", "255.255.255.255"])
            .unwrap();
        assert!(run(cli).is_err());
    }
}
