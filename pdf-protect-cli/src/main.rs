use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::style::{Color, Stylize};
use dialoguer::{Input, Password, Select};
use pdf_protect::options::DEFAULT_SUFFIX;
use pdf_protect::{
    derive_default_output_with, Channel, FormState, Palette, ProtectOptions, ProtectionResult,
    Report, Rgb, Theme,
};
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit status for a form that failed validation
const EXIT_VALIDATION: i32 = 2;
/// Exit status for a failure inside the PDF library or while writing
const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(
    name = "pdfprotect",
    about = "Protect PDF documents with a password",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Colour theme for messages (dark, light)
    #[arg(long, global = true, default_value = "dark", value_parser = parse_theme)]
    theme: Theme,

    /// Suffix for derived output names
    #[arg(long, global = true, default_value = DEFAULT_SUFFIX)]
    suffix: String,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in input, output and password interactively
    Form,

    /// Protect a PDF with a password
    Protect {
        /// Input PDF file
        input: PathBuf,

        /// Output file path (defaults to <input>_protected.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Read the password and its confirmation as two lines from stdin
        #[arg(long)]
        password_stdin: bool,
    },

    /// Print the default output path for an input PDF
    Suggest {
        /// Input PDF file
        input: PathBuf,
    },
}

fn parse_theme(value: &str) -> Result<Theme, String> {
    value.parse()
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "pdf_protect=debug,pdfprotect=debug"
    } else {
        "pdf_protect=error,pdfprotect=error"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = ProtectOptions::new().with_suffix(&cli.suffix);

    match cli.command {
        Commands::Form => {
            let mut ui = Ui::new(cli.theme);
            let form = fill_form(&mut ui, &options)?;
            let result = form.protect(&options);
            finish(&ui, &result);
        }

        Commands::Protect {
            input,
            output,
            password_stdin,
        } => {
            let ui = Ui::new(cli.theme);
            let mut form = FormState::new();
            if let Some(output) = output {
                form.choose_output(output, &options);
            }
            form.select_input(&input, &options);

            let (password, confirm) = if password_stdin {
                read_passwords(io::stdin().lock())?
            } else {
                prompt_passwords()?
            };
            form.password = password;
            form.confirm_password = confirm;

            let result = form.protect(&options);
            finish(&ui, &result);
        }

        Commands::Suggest { input } => {
            println!("{}", derive_default_output_with(&input, &options).display());
        }
    }

    Ok(())
}

/// Walk the user through the form fields, proposing an output path once the
/// input is known.
fn fill_form(ui: &mut Ui, options: &ProtectOptions) -> Result<FormState> {
    let names: Vec<&str> = Theme::ALL.iter().map(|theme| theme.name()).collect();
    let current = Theme::ALL
        .iter()
        .position(|&theme| theme == ui.theme)
        .unwrap_or_default();
    let selected = Select::new()
        .with_prompt("Theme")
        .items(&names)
        .default(current)
        .interact()
        .context("Failed to read theme")?;
    ui.set_theme(Theme::ALL[selected]);

    ui.heading("Protect a PDF with a Password");

    let mut form = FormState::new();

    let input: String = Input::new()
        .with_prompt("Input PDF")
        .allow_empty(true)
        .interact_text()
        .context("Failed to read input path")?;
    if !input.trim().is_empty() {
        form.select_input(input.trim(), options);
    }

    let output: String = Input::new()
        .with_prompt("Output PDF")
        .default(form.output_path.clone())
        .allow_empty(true)
        .interact_text()
        .context("Failed to read output path")?;
    if output.trim().is_empty() {
        form.output_path.clear();
    } else if output != form.output_path {
        form.choose_output(output.trim(), options);
    }

    let (password, confirm) = prompt_passwords()?;
    form.password = password;
    form.confirm_password = confirm;

    Ok(form)
}

fn prompt_passwords() -> Result<(String, String)> {
    let password = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()
        .context("Failed to read password")?;
    let confirm = Password::new()
        .with_prompt("Confirm")
        .allow_empty_password(true)
        .interact()
        .context("Failed to read password confirmation")?;
    Ok((password, confirm))
}

/// Password on the first line, confirmation on the second. Missing lines are
/// treated as empty so validation reports them.
fn read_passwords(reader: impl BufRead) -> Result<(String, String)> {
    let mut lines = reader.lines();
    let mut next_line = || -> Result<String> {
        let line = lines.next().transpose().context("Failed to read stdin")?;
        Ok(line
            .map(|line| line.trim_end_matches('\r').to_string())
            .unwrap_or_default())
    };

    let password = next_line()?;
    let confirm = next_line()?;
    Ok((password, confirm))
}

/// Report the outcome and exit with a status matching the channel.
fn finish(ui: &Ui, result: &ProtectionResult) {
    let report = Report::from(result);
    ui.show(&report);

    let code = match report.channel {
        Channel::Success => return,
        Channel::Warning => EXIT_VALIDATION,
        Channel::Error => EXIT_FAILURE,
    };
    std::process::exit(code);
}

/// Terminal output styled with the active theme palette.
struct Ui {
    theme: Theme,
    color: bool,
}

impl Ui {
    fn new(theme: Theme) -> Self {
        Self {
            theme,
            color: io::stdout().is_terminal() && io::stderr().is_terminal(),
        }
    }

    fn set_theme(&mut self, theme: Theme) {
        if theme != self.theme {
            debug!(theme = %theme, "theme changed");
            self.theme = theme;
        }
    }

    fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    fn heading(&self, text: &str) {
        if self.color {
            println!("{}", text.with(rgb(self.palette().accent)).bold());
        } else {
            println!("{text}");
        }
    }

    fn show(&self, report: &Report) {
        let rendered = if self.color {
            let title_color = match report.channel {
                Channel::Success => Color::Green,
                Channel::Warning => Color::Yellow,
                Channel::Error => Color::Red,
            };
            format!(
                "{}\n{}",
                report.title.with(title_color).bold(),
                report.message.as_str().with(rgb(self.palette().foreground))
            )
        } else {
            format!("{}\n{}", report.title, report.message)
        };

        match report.channel {
            Channel::Success => println!("{rendered}"),
            Channel::Warning | Channel::Error => eprintln!("{rendered}"),
        }
    }
}

fn rgb(color: Rgb) -> Color {
    Color::Rgb {
        r: color.0,
        g: color.1,
        b: color.2,
    }
}
