//! Homekeeper - Main Entry Point
//!
//! Thin CLI over the `homekeeper` library: manage household reminders,
//! appliances and wiki pages, and ask the household assistant questions.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use homekeeper::HomeHandler;
use tracing_subscriber::EnvFilter;

/// Homekeeper - household reminders, appliances and wiki with a Q&A assistant
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the household data file (TOML)
    #[arg(short, long, default_value = "home.toml")]
    file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a reminder
    Add {
        /// Reminder title
        title: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: String,
        /// Recurrence rule: daily/weekly/monthly/yearly
        #[arg(long)]
        rule: Option<String>,
        /// Owning entity as kind:id (e.g. appliance:a-1)
        #[arg(long)]
        remindable: Option<String>,
        /// User creating the reminder
        #[arg(long, default_value = "local")]
        actor: String,
    },
    /// Complete a reminder (recurring reminders spawn the next occurrence)
    Complete {
        /// Reminder ID (e.g. "#1")
        id: String,
    },
    /// List reminders
    List {
        /// Filter: all/pending/completed/overdue/upcoming
        #[arg(long)]
        filter: Option<String>,
    },
    /// Manage appliances
    Appliance {
        #[command(subcommand)]
        command: ApplianceCommand,
    },
    /// Manage wiki pages
    Wiki {
        #[command(subcommand)]
        command: WikiCommand,
    },
    /// Ask the household assistant a question
    Ask {
        /// The question (words are joined with spaces)
        question: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
enum ApplianceCommand {
    /// Record an appliance
    Add {
        name: String,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List recorded appliances
    List,
}

#[derive(Subcommand, Debug)]
enum WikiCommand {
    /// Create a wiki page
    Add {
        title: String,
        body: String,
        #[arg(long, default_value = "local")]
        actor: String,
    },
    /// List wiki page titles
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    let handler = HomeHandler::new(&args.file)?;

    let output = match args.command {
        Command::Add {
            title,
            due,
            rule,
            remindable,
            actor,
        } => Some(handler.handle_add_reminder(
            &title,
            &due,
            rule.as_deref(),
            remindable.as_deref(),
            &actor,
        )?),
        Command::Complete { id } => Some(handler.handle_complete(&id)?),
        Command::List { filter } => Some(handler.handle_list_reminders(filter.as_deref())?),
        Command::Appliance { command } => match command {
            ApplianceCommand::Add {
                name,
                location,
                brand,
                model,
                notes,
            } => Some(handler.handle_add_appliance(&name, location, brand, model, notes)?),
            ApplianceCommand::List => Some(handler.handle_list_appliances()?),
        },
        Command::Wiki { command } => match command {
            WikiCommand::Add { title, body, actor } => {
                Some(handler.handle_add_wiki_page(&title, &body, &actor)?)
            }
            WikiCommand::List => Some(handler.handle_list_wiki_pages()?),
        },
        Command::Ask { question } => handler.handle_ask(&question.join(" ")).await?,
    };

    if let Some(output) = output {
        println!("{}", output);
    }

    Ok(())
}
