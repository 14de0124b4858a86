/*
 * Copyright (c) Radzivon Bartoshyk. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
mod codec;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use log::{error, info};
use pic_sharpen::{Kernel, RemainderPolicy, Sharpener, Sharpening, ThreadingPolicy};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum KernelArg {
    /// Center 9, neighbors -1
    Sharpen,
    /// Center 8, neighbors -1
    Laplacian,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum RemainderArg {
    /// Last worker also filters the leftover pixels
    Extend,
    /// Leftover pixels stay black
    Drop,
}

/// Apply a 3x3 Laplacian filter to an image with a pool of workers
#[derive(Parser, Debug)]
#[command(name = "pic-sharpen", version)]
struct Args {
    /// Input image, usually a binary PPM
    input: PathBuf,

    /// Where the filtered P6 image is written
    #[arg(short, long, default_value = "laplacian.ppm")]
    output: PathBuf,

    /// Worker count, 0 derives it from the image size
    #[arg(short, long, default_value_t = 16)]
    threads: usize,

    #[arg(short, long, value_enum, default_value_t = KernelArg::Sharpen)]
    kernel: KernelArg,

    #[arg(long, value_enum, default_value_t = RemainderArg::Extend)]
    remainder: RemainderArg,

    /// -v info, -vv debug, -vvv trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn threading_policy(threads: usize) -> ThreadingPolicy {
    match threads {
        0 => ThreadingPolicy::Adaptive,
        1 => ThreadingPolicy::Single,
        n => ThreadingPolicy::Fixed(n),
    }
}

fn build_sharpener(args: &Args) -> Sharpener {
    let kernel = match args.kernel {
        KernelArg::Sharpen => Kernel::SHARPEN,
        KernelArg::Laplacian => Kernel::LAPLACIAN,
    };
    let mut sharpener = Sharpener::new(kernel);
    sharpener.set_threading_policy(threading_policy(args.threads));
    sharpener.set_remainder_policy(match args.remainder {
        RemainderArg::Extend => RemainderPolicy::ExtendLast,
        RemainderArg::Drop => RemainderPolicy::Drop,
    });
    sharpener
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(|e| anyhow!("Failed to initialize logger: {e}"))
}

fn run(args: &Args) -> Result<()> {
    let store = codec::read_image(&args.input)?;
    info!(
        "Loaded {} ({}x{})",
        args.input.display(),
        store.width,
        store.height
    );

    let sharpener = build_sharpener(args);
    let (sharpened, report) = sharpener.sharpen(&store)?;

    println!(
        "Work per thread: {}",
        report.work_units.first().map_or(0, |unit| unit.size)
    );
    println!("Elapsed time: {:.3}", report.elapsed_secs());

    codec::write_ppm(&args.output, &sharpened)?;
    info!("Saved {}", args.output.display());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = init_logging(args.verbose) {
        eprintln!("{e:#}");
    }
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threads_map_to_policy() {
        assert_eq!(threading_policy(0), ThreadingPolicy::Adaptive);
        assert_eq!(threading_policy(1), ThreadingPolicy::Single);
        assert_eq!(threading_policy(16), ThreadingPolicy::Fixed(16));
    }

    #[test]
    fn parses_defaults() {
        let args = Args::try_parse_from(["pic-sharpen", "in.ppm"]).unwrap();
        assert_eq!(args.output, PathBuf::from("laplacian.ppm"));
        assert_eq!(args.threads, 16);
        let sharpener = build_sharpener(&args);
        assert_eq!(*sharpener.kernel(), Kernel::SHARPEN);
        assert_eq!(sharpener.remainder_policy(), RemainderPolicy::ExtendLast);
    }

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "pic-sharpen",
            "in.ppm",
            "-k",
            "laplacian",
            "--remainder",
            "drop",
            "-t",
            "3",
            "-vv",
        ])
        .unwrap();
        let sharpener = build_sharpener(&args);
        assert_eq!(*sharpener.kernel(), Kernel::LAPLACIAN);
        assert_eq!(sharpener.remainder_policy(), RemainderPolicy::Drop);
        assert_eq!(sharpener.threading_policy(), ThreadingPolicy::Fixed(3));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn missing_input_is_usage_error() {
        assert!(Args::try_parse_from(["pic-sharpen"]).is_err());
    }
}
