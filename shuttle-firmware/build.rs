//! Build script for shuttle-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates device.toml at compile time
//! - Generates `device_config.rs` (pin table, polarity, LCD address and the
//!   `DeviceConfig` constant) into `OUT_DIR`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Largest debounce stall the loop tolerates (ms)
const MAX_DEBOUNCE_MS: i64 = 500;

/// RP2040 ADC resolution
const ADC_MAX: i64 = 4095;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    setup_linker(&out_dir);
    let device = validate_config();
    generate_config(&out_dir, &device);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validated contents of device.toml
struct Device {
    active_high: bool,
    /// (button variant name, GPIO)
    buttons: Vec<(&'static str, i64)>,
    selector: Selector,
    selector_max: i64,
    lcd_address: i64,
    lcd_bus: &'static str,
    lcd_sda: i64,
    lcd_scl: i64,
    debounce_ms: i64,
    poll_interval_ms: i64,
    handedness: &'static str,
    training: &'static str,
    difficulty: &'static str,
}

enum Selector {
    Analog { pin: i64 },
    Stepped,
}

/// Validate device.toml configuration at compile time
fn validate_config() -> Device {
    // Re-run if device.toml changes
    println!("cargo:rerun-if-changed=device.toml");

    let config_path = Path::new("device.toml");

    // Check if config file exists
    if !config_path.exists() {
        fail(
            "device.toml not found!",
            &[
                "The firmware requires a device.toml configuration file.".into(),
                "Please create one in the shuttle-firmware directory.".into(),
            ],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read device.toml", &[format!("Error: {e}")]),
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in device.toml",
            &e.to_string().lines().map(String::from).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();
    let device = parse_device(&config, &mut errors);

    if !errors.is_empty() {
        fail("Invalid device.toml", &errors);
    }

    println!("cargo:warning=device.toml validated successfully");
    device
}

fn parse_device(config: &toml::Value, errors: &mut Vec<String>) -> Device {
    let active_high = choice(config, "buttons", "active", &["low", "high"], "low", errors) == "high";

    let mut buttons = Vec::new();
    for (key, variant, required) in [
        ("confirm", "Confirm", true),
        ("cancel", "Cancel", true),
        ("pause", "Pause", false),
        ("up", "Up", false),
        ("down", "Down", false),
    ] {
        match integer(config, "buttons", key, errors) {
            Some(pin) => {
                check_gpio(&format!("buttons.{key}"), pin, errors);
                buttons.push((variant, pin));
            }
            None if required => errors.push(format!("buttons.{key} is required")),
            None => {}
        }
    }

    let selector = match choice(config, "selector", "kind", &["analog", "stepped"], "analog", errors) {
        "stepped" => {
            let has = |v: &str| buttons.iter().any(|(b, _)| *b == v);
            if !has("Up") || !has("Down") {
                errors.push("selector.kind = \"stepped\" needs buttons.up and buttons.down".into());
            }
            Selector::Stepped
        }
        _ => match integer(config, "selector", "pin", errors) {
            Some(pin) if (26..=29).contains(&pin) => Selector::Analog { pin },
            Some(pin) => {
                errors.push(format!("selector.pin = {pin} is not an ADC pin (26-29)"));
                Selector::Stepped
            }
            None => {
                errors.push("selector.pin is required for an analog selector".into());
                Selector::Stepped
            }
        },
    };

    let selector_max = integer(config, "selector", "max", errors).unwrap_or(ADC_MAX);
    if !(1..=ADC_MAX).contains(&selector_max) {
        errors.push(format!("selector.max = {selector_max} must be 1-{ADC_MAX}"));
    }

    let lcd_address = integer(config, "lcd", "address", errors).unwrap_or(0x27);
    if !(0x08..=0x77).contains(&lcd_address) {
        errors.push(format!("lcd.address = {lcd_address:#04x} is not a 7-bit I2C address"));
    }
    let lcd_sda = integer(config, "lcd", "sda", errors).unwrap_or(4);
    let lcd_scl = integer(config, "lcd", "scl", errors).unwrap_or(5);
    check_gpio("lcd.sda", lcd_sda, errors);
    check_gpio("lcd.scl", lcd_scl, errors);
    let lcd_bus = match (lcd_sda % 4, lcd_scl == lcd_sda + 1) {
        (0, true) => "I2C0",
        (2, true) => "I2C1",
        _ => {
            errors.push(format!(
                "lcd.sda = {lcd_sda}, lcd.scl = {lcd_scl} is not an I2C pin pair"
            ));
            "I2C0"
        }
    };

    let debounce_ms = integer(config, "timing", "debounce_ms", errors).unwrap_or(50);
    if !(0..=MAX_DEBOUNCE_MS).contains(&debounce_ms) {
        errors.push(format!(
            "timing.debounce_ms = {debounce_ms} must be 0-{MAX_DEBOUNCE_MS}"
        ));
    }
    let poll_interval_ms = integer(config, "timing", "poll_interval_ms", errors).unwrap_or(5);
    if !(1..=1000).contains(&poll_interval_ms) {
        errors.push(format!(
            "timing.poll_interval_ms = {poll_interval_ms} must be 1-1000"
        ));
    }

    // Pins may only be claimed once
    let mut claimed: Vec<(String, i64)> = buttons
        .iter()
        .map(|(b, pin)| (format!("button {b}"), *pin))
        .collect();
    if let Selector::Analog { pin } = selector {
        claimed.push(("selector".into(), pin));
    }
    claimed.push(("lcd.sda".into(), lcd_sda));
    claimed.push(("lcd.scl".into(), lcd_scl));
    for (i, (owner, pin)) in claimed.iter().enumerate() {
        if let Some((other, _)) = claimed[..i].iter().find(|(_, p)| p == pin) {
            errors.push(format!("GPIO {pin} used by both {other} and {owner}"));
        }
    }

    Device {
        active_high,
        buttons,
        selector,
        selector_max,
        lcd_address,
        lcd_bus,
        lcd_sda,
        lcd_scl,
        debounce_ms,
        poll_interval_ms,
        handedness: variant(
            choice(config, "defaults", "handedness", &["right", "left"], "right", errors),
        ),
        training: variant(choice(
            config,
            "defaults",
            "training",
            &["backhand", "forehand", "smash", "general"],
            "backhand",
            errors,
        )),
        difficulty: variant(choice(
            config,
            "defaults",
            "difficulty",
            &["beginner", "easy", "normal", "hard", "extreme"],
            "normal",
            errors,
        )),
    }
}

/// Read an optional integer key
fn integer(config: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) -> Option<i64> {
    let value = config.get(section)?.get(key)?;
    match value.as_integer() {
        Some(n) => Some(n),
        None => {
            errors.push(format!("{section}.{key} must be an integer"));
            None
        }
    }
}

/// Read an optional string key restricted to `allowed`
fn choice(
    config: &toml::Value,
    section: &str,
    key: &str,
    allowed: &[&'static str],
    default: &'static str,
    errors: &mut Vec<String>,
) -> &'static str {
    let Some(value) = config.get(section).and_then(|s| s.get(key)) else {
        return default;
    };
    match value.as_str().and_then(|s| allowed.iter().find(|a| **a == s)) {
        Some(found) => *found,
        None => {
            errors.push(format!("{section}.{key} must be one of: {}", allowed.join(", ")));
            default
        }
    }
}

fn check_gpio(name: &str, pin: i64, errors: &mut Vec<String>) {
    if !(0..=29).contains(&pin) {
        errors.push(format!("{name} = {pin} is not an RP2040 GPIO (0-29)"));
    }
}

/// Map a lowercase config name to its enum variant name
fn variant(name: &'static str) -> &'static str {
    match name {
        "right" => "Right",
        "left" => "Left",
        "backhand" => "Backhand",
        "forehand" => "Forehand",
        "smash" => "Smash",
        "general" => "General",
        "beginner" => "Beginner",
        "easy" => "Easy",
        "hard" => "Hard",
        "extreme" => "Extreme",
        _ => "Normal",
    }
}

/// Emit the board description consumed by `src/board.rs`
fn generate_config(out_dir: &Path, device: &Device) {
    let (level, pull) = if device.active_high {
        ("High", "Down")
    } else {
        ("Low", "Up")
    };

    let buttons: String = device
        .buttons
        .iter()
        .map(|(id, pin)| format!("            (ButtonId::{id}, Button::new($p.PIN_{pin})),\n"))
        .collect();

    let (selector_kind, take_selector) = match device.selector {
        Selector::Analog { pin } => ("Analog", format!("Selector::pot($p.ADC, $p.PIN_{pin})")),
        Selector::Stepped => ("Stepped", "Selector::Absent".to_string()),
    };

    let code = format!(
        "// Generated by build.rs from device.toml. Do not edit.

pub const BUTTON_LEVEL: ActiveLevel = ActiveLevel::{level};
pub const BUTTON_PULL: Pull = Pull::{pull};
pub const BUTTON_COUNT: usize = {count};
pub const LCD_ADDRESS: u8 = {address:#04x};

pub const DEVICE_CONFIG: DeviceConfig = DeviceConfig {{
    debounce_ms: {debounce},
    selector_max: {max},
    selector: SelectorKind::{selector_kind},
    defaults: Selections {{
        handedness: Handedness::{handedness},
        training: TrainingType::{training},
        difficulty: Difficulty::{difficulty},
    }},
    poll_interval_ms: {poll},
}};

/// Claim the button pins: `[(ButtonId, Button); BUTTON_COUNT]`
macro_rules! take_buttons {{
    ($p:ident) => {{
        [
{buttons}        ]
    }};
}}

/// Claim the selector input
macro_rules! take_selector {{
    ($p:ident) => {{
        {take_selector}
    }};
}}

/// Claim the LCD bus
macro_rules! take_lcd_bus {{
    ($p:ident) => {{
        I2c::new_blocking($p.{bus}, $p.PIN_{scl}, $p.PIN_{sda}, i2c::Config::default())
    }};
}}
",
        count = device.buttons.len(),
        address = device.lcd_address,
        debounce = device.debounce_ms,
        max = device.selector_max,
        handedness = device.handedness,
        training = device.training,
        difficulty = device.difficulty,
        poll = device.poll_interval_ms,
        bus = device.lcd_bus,
        scl = device.lcd_scl,
        sda = device.lcd_sda,
    );

    let path = out_dir.join("device_config.rs");
    if let Err(e) = fs::write(&path, code) {
        fail("Failed to write device_config.rs", &[format!("Error: {e}")]);
    }
}

/// Abort the build with a framed error
fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 62 {
                format!("{}...", line.chars().take(59).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
