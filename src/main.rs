use clap::{Args, Parser, Subcommand};
use energenie_rs::util::hex::hex_to_bytes;
use energenie_rs::{
    init_logger, log_info, EnergenieError, EnergenieRadio, LegacySocket, MiHomeSocket,
};

/// Captured MiHome frames, replayed through the decoder by `demo`.
const CAPTURED_FRAMES: &[&str] = &[
    "0D 04 02 4B A8 98 36 EF 9C C0 3D E2 25 72",
    "0D 04 02 B9 28 0C 8D 78 8F 65 BA ED 7B 84",
    "16 04 05 C9 8C FB D7 5A 44 8E EE 83 21 CC CB CF 4A B8 64 66 2C 64 AF",
    "1C 04 02 58 0B 55 24 23 BC D2 AC 50 8D 26 5B A2 CF 74 B7 73 47 4A A9 F1 97 F1 F0 3F 23",
];

#[derive(Parser)]
#[command(name = "energenie-cli")]
#[command(about = "Control Energenie 433 MHz sockets via an RFM69 radio")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Which socket a switch command addresses. A sensor id selects a MiHome
/// adaptor over FSK; otherwise a legacy OOK socket is driven, channel 1 by
/// default.
#[derive(Args)]
struct Target {
    /// Legacy socket channel (1-4)
    #[arg(short, long, conflicts_with = "sensor")]
    channel: Option<u8>,

    /// MiHome sensor id (decimal or 0x-prefixed hex)
    #[arg(short, long, value_parser = parse_u32)]
    sensor: Option<u32>,

    /// Legacy 20-bit house address
    #[arg(short, long, value_parser = parse_u32, default_value = "0xA0170")]
    address: u32,

    /// Burst repeat count (defaults per device family)
    #[arg(short, long)]
    times: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Switch a socket on
    On {
        #[command(flatten)]
        target: Target,
    },
    /// Switch a socket off
    Off {
        #[command(flatten)]
        target: Target,
    },
    /// Sit in receive and print decoded OpenThings messages as JSON
    Watch,
    /// Replay captured MiHome frames through the decoder
    Demo,
}

/// Accept decimal or 0x-prefixed hex.
fn parse_u32(s: &str) -> Result<u32, String> {
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("invalid number {s:?}: {e}"))
}

#[cfg(feature = "raspberry-pi")]
fn open_radio() -> Result<EnergenieRadio<energenie_rs::PiPort>, EnergenieError> {
    let port = energenie_rs::PiPort::new(&energenie_rs::PortConfig::default())?;
    Ok(EnergenieRadio::new(port))
}

#[cfg(not(feature = "raspberry-pi"))]
fn open_radio() -> Result<EnergenieRadio<energenie_rs::MockPort>, EnergenieError> {
    // no hardware: SPI traffic is visible with RUST_LOG=debug
    Ok(EnergenieRadio::new(energenie_rs::MockPort::new()))
}

/// Drive the addressed socket to `state`.
fn switch(target: &Target, state: bool) -> Result<(), EnergenieError> {
    let mut radio = open_radio()?;
    let state_str = if state { "ON" } else { "OFF" };

    if let Some(sensor) = target.sensor {
        let socket = MiHomeSocket::new(sensor);
        let times = target.times.unwrap_or(MiHomeSocket::DEFAULT_TIMES);
        socket.set(&mut radio, state, times)?;
        log_info(&format!("mihome socket 0x{sensor:08X} switched {state_str}"));
    } else {
        let channel = target.channel.unwrap_or(1);
        let socket = LegacySocket::with_address(target.address, channel)?;
        let times = target.times.unwrap_or(LegacySocket::DEFAULT_TIMES);
        socket.set(&mut radio, state, times)?;
        log_info(&format!("legacy socket channel {channel} switched {state_str}"));
    }

    Ok(())
}

fn main() -> Result<(), EnergenieError> {
    init_logger();

    let cli = Cli::parse();

    match cli.command {
        Commands::On { target } => switch(&target, true)?,
        Commands::Off { target } => switch(&target, false)?,
        Commands::Watch => {
            let mut radio = open_radio()?;
            radio.always_receive()?;
            log_info("listening for OpenThings traffic");
            loop {
                if let Some(message) = radio.ot_recv(1000)? {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&message)
                            .unwrap_or_else(|e| format!("<unprintable message: {e}>"))
                    );
                }
            }
        }
        Commands::Demo => {
            for frame in CAPTURED_FRAMES {
                println!("encoded msg: {frame}");
                match energenie_rs::decode(&hex_to_bytes(frame)) {
                    Some(message) => println!(
                        "{}",
                        serde_json::to_string_pretty(&message)
                            .unwrap_or_else(|e| format!("<unprintable message: {e}>"))
                    ),
                    None => println!("(frame did not decode)"),
                }
            }
        }
    }

    Ok(())
}
