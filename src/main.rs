//! Console host for the external-organization staff screen.
//!
//! Reads one command per line from stdin, runs the matching screen action and
//! prints the resulting screen snapshot as JSON.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use config::Config;
use dotenvy::dotenv;

use staff_exorg::forms::employee::EmployeeForm;
use staff_exorg::models::config::AppConfig;
use staff_exorg::repository::{
    EmployeeExOrgReader, EmployeeExOrgWriter, ErrorLogReader, ErrorLogWriter, LocalUserReader,
};
use staff_exorg::view::picker::{FileFilter, FilePicker};
use staff_exorg::view::screen::StaffExOrgScreen;
use staff_exorg::{DieselStaffScreen, open_screen};

const HELP: &str = "\
commands:
  refresh                 reload the roster
  show <active|dismissed> switch the list filter
  select <id|none>        select a row
  new                     start a new record
  edit                    edit the selected record
  form <json>             apply card values, e.g. {\"full_name\":\"Ivanov I.\",\"date_employment\":\"2024-01-15\"}
  dismiss                 toggle dismissal of the card
  date <YYYY-MM-DD>       change the dismissal date
  region <on|off>         toggle the additional region flag
  photo                   attach a photo
  save                    store the card
  log                     print the latest stored errors
  close                   close the screen and exit";

/// Asks for a photo path on stdin; an empty line cancels.
#[cfg(not(feature = "dialog"))]
struct ConsoleFilePicker;

#[cfg(not(feature = "dialog"))]
impl FilePicker for ConsoleFilePicker {
    fn pick_file(&self, filters: &[FileFilter]) -> Option<PathBuf> {
        let names: Vec<&str> = filters.iter().map(|filter| filter.name).collect();
        print!("photo path ({}), empty to cancel: ", names.join(", "));
        io::stdout().flush().ok()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok()?;
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let path = PathBuf::from(line);
        if !staff_exorg::view::picker::matches_filters(&path, filters) {
            log::warn!("{} does not match the offered file types", path.display());
            return None;
        }
        Some(path)
    }
}

#[cfg(feature = "dialog")]
fn picker() -> staff_exorg::view::picker::DialogFilePicker {
    staff_exorg::view::picker::DialogFilePicker
}

#[cfg(not(feature = "dialog"))]
fn picker() -> ConsoleFilePicker {
    ConsoleFilePicker
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "on" | "true" | "dismissed" => Some(true),
        "off" | "false" | "active" => Some(false),
        _ => None,
    }
}

/// Runs one command line. Returns `false` once the screen is closed.
fn run_command<R, I, P>(screen: &mut StaffExOrgScreen<R, I, P>, line: &str) -> bool
where
    R: EmployeeExOrgReader + EmployeeExOrgWriter + ErrorLogWriter + ErrorLogReader,
    I: LocalUserReader,
    P: FilePicker,
{
    let (command, argument) = match line.split_once(' ') {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };

    match command {
        "refresh" => screen.refresh(),
        "show" => match parse_flag(argument) {
            Some(show_dismissed) => screen.set_show_dismissed(show_dismissed),
            None => println!("expected `active` or `dismissed`"),
        },
        "select" => match argument {
            "none" => screen.select(None),
            id => match id.parse::<i32>() {
                Ok(id) => screen.select(Some(id)),
                Err(e) => println!("invalid id {id}: {e}"),
            },
        },
        "new" => screen.create_new(),
        "edit" => screen.edit(),
        "form" => match serde_json::from_str::<EmployeeForm>(argument) {
            Ok(form) => screen.apply_edits(form),
            Err(e) => println!("invalid form: {e}"),
        },
        "dismiss" => screen.toggle_dismissal(),
        "date" => match argument.parse::<NaiveDate>() {
            Ok(date) => screen.set_dismissal_date(date),
            Err(e) => println!("invalid date {argument}: {e}"),
        },
        "region" => match parse_flag(argument) {
            Some(flag) => screen.set_add_working_in_region(flag),
            None => println!("expected `on` or `off`"),
        },
        "photo" => screen.load_photo(),
        "save" => screen.save(),
        "log" => {
            match screen.repository().list_error_logs(20) {
                Ok(entries) => {
                    for entry in entries {
                        println!(
                            "{} {}@{}: {}",
                            entry.created_at, entry.user_name, entry.machine_name, entry.message
                        );
                    }
                }
                Err(e) => log::error!("Failed to read error log: {e}"),
            }
            return true;
        }
        "close" | "quit" | "exit" => screen.close(),
        "help" | "" => {
            println!("{HELP}");
            return true;
        }
        other => {
            println!("unknown command `{other}`, try `help`");
            return true;
        }
    }

    print_snapshot(screen);
    !screen.state().closed
}

fn print_snapshot<R, I, P>(screen: &StaffExOrgScreen<R, I, P>)
where
    R: EmployeeExOrgReader + EmployeeExOrgWriter + ErrorLogWriter,
    I: LocalUserReader,
    P: FilePicker,
{
    match serde_json::to_string_pretty(&screen.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to render screen: {e}"),
    }
}

fn run_console<P: FilePicker>(mut screen: DieselStaffScreen<P>) {
    print_snapshot(&screen);
    println!("{HELP}");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                if !run_command(&mut screen, line.trim()) {
                    break;
                }
            }
            Err(e) => {
                log::error!("Failed to read command: {e}");
                break;
            }
        }
    }
    log::info!("Staff screen closed");
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    let app_config = match settings.try_deserialize::<AppConfig>() {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading app config: {}", err);
            std::process::exit(1);
        }
    };

    let screen = match open_screen(&app_config, picker()) {
        Ok(screen) => screen,
        Err(e) => {
            log::error!("Failed to open staff screen: {e}");
            std::process::exit(1);
        }
    };

    run_console(screen);
}
