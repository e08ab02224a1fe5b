use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use wordbank_bot::application::messaging::MessageParser;
use wordbank_bot::application::services::{ReplyService, WordBankService};
use wordbank_bot::infrastructure::config::Config;
use wordbank_bot::{BotError, JsonKeywordStore, KeywordStore};

#[derive(Parser)]
#[command(name = "wordbank-bot")]
#[command(about = "Keyword auto-reply word bank", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Word bank file (overrides config)
    #[arg(short, long)]
    data: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an entry to a keyword and enable it in a group
    Add {
        keyword: String,
        content: String,
        #[arg(short, long, default_value = "console")]
        group: String,
    },
    /// Remove an entry by its 1-based number as shown by `show`
    Remove { keyword: String, index: usize },
    /// Delete whole keywords
    Delete {
        #[arg(required = true)]
        keywords: Vec<String>,
    },
    /// Replace the alias list of a keyword
    Alias {
        keyword: String,
        #[arg(required = true)]
        aliases: Vec<String>,
    },
    /// Enable a keyword in groups
    Enable {
        keyword: String,
        #[arg(required = true)]
        groups: Vec<String>,
    },
    /// Disable a keyword in groups
    Disable {
        keyword: String,
        #[arg(required = true)]
        groups: Vec<String>,
    },
    /// Show entries, aliases and groups of a keyword
    Show { keyword: String },
    /// List all keywords
    List,
    /// Print the reply a group message would get
    Reply {
        text: String,
        #[arg(short, long, default_value = "console")]
        group: String,
    },
    /// Chat with the bot from the console as a group member
    Chat {
        #[arg(short, long, default_value = "console")]
        group: String,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Version => {
            println!("wordbank-bot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config(&cli.config);
        }
        command => {
            let config = load_config(&cli.config, cli.data);
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    tracing::error!("Failed to start runtime: {}", e);
                    std::process::exit(1);
                }
            };
            if let Err(e) = rt.block_on(run(command, config)) {
                tracing::error!("{}", e);
                std::process::exit(1);
            }
        }
    }
}

fn load_config(config_path: &str, data_override: Option<PathBuf>) -> Config {
    let mut config = if Path::new(config_path).exists() {
        Config::load(config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    };

    if let Some(path) = data_override {
        config.storage.path = path;
    }
    config
}

fn init_config(config_path: &str) {
    if Path::new(config_path).exists() {
        tracing::warn!("{} already exists, not overwriting", config_path);
        return;
    }

    let yaml = match Config::default().to_yaml() {
        Ok(yaml) => yaml,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };
    match std::fs::write(config_path, yaml) {
        Ok(()) => println!("Wrote default config to {}", config_path),
        Err(e) => {
            tracing::error!("Failed to write {}: {}", config_path, e);
            std::process::exit(1);
        }
    }
}

async fn run(command: Commands, config: Config) -> Result<(), BotError> {
    let store: Arc<dyn KeywordStore> = Arc::new(JsonKeywordStore::open(&config.storage.path)?);
    let admin = WordBankService::new(store.clone(), config.reply.words_limit);
    let parser = MessageParser::new(&config.bot.prefix);
    let replies = ReplyService::new(store, config.reply.need_prefix);

    match command {
        Commands::Add { keyword, content, group } => {
            if admin.add_entry(&keyword, &content, &group).await? {
                println!("Added: {} -> {}", keyword, content);
            } else {
                println!("Entry already present: {} -> {}", keyword, content);
            }
        }
        Commands::Remove { keyword, index } => {
            let position = index
                .checked_sub(1)
                .ok_or_else(|| BotError::InvalidArgs("entry numbers start at 1".to_string()))?;
            admin.remove_entry_at(&keyword, position).await?;
            println!("Removed entry {} of keyword [{}]", index, keyword);
        }
        Commands::Delete { keywords } => {
            for outcome in admin.delete_keywords(&keywords).await? {
                println!("{}", outcome);
            }
        }
        Commands::Alias { keyword, aliases } => {
            let shown = aliases.join(", ");
            admin.set_aliases(&keyword, aliases).await?;
            println!("Aliases of keyword [{}]: {}", keyword, shown);
        }
        Commands::Enable { keyword, groups } => {
            admin.enable(&keyword, &groups).await?;
            for group in &groups {
                println!("Group ({}) enabled keyword: {}", group, keyword);
            }
        }
        Commands::Disable { keyword, groups } => {
            admin.disable(&keyword, &groups).await?;
            for group in &groups {
                println!("Group ({}) disabled keyword: {}", group, keyword);
            }
        }
        Commands::Show { keyword } => {
            println!("{}", admin.describe(&keyword).await?);
        }
        Commands::List => {
            let keys = admin.list_keys().await;
            if keys.is_empty() {
                println!("No keywords yet");
            } else {
                println!("All keywords:\n{}", keys.join(", "));
            }
        }
        Commands::Reply { text, group } => {
            let message = parser.parse(group, text);
            match replies.reply_to(&message).await {
                Some(reply) => println!("{}", reply),
                None => println!("(no reply)"),
            }
        }
        Commands::Chat { group } => {
            run_console(&config.bot.name, &group, &parser, &replies).await?;
        }
        // handled before the store is opened
        Commands::Version | Commands::InitConfig => {}
    }

    Ok(())
}

async fn run_console(
    name: &str,
    group: &str,
    parser: &MessageParser,
    replies: &ReplyService,
) -> Result<(), BotError> {
    tracing::info!("Starting console chat for group {} (type 'exit' to quit)", group);

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        let message = parser.parse(group, line);
        if let Some(reply) = replies.reply_to(&message).await {
            println!("[{}] {}", name, reply);
        }
    }

    Ok(())
}
