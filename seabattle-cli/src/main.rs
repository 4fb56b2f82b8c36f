use std::io::{self, BufRead, Write};

use clap::{App, Arg, ArgMatches};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;

use seabattle::{
    board::{Board, BOARD_SIZE},
    fleet::random_fleet,
};

fn main() -> io::Result<()> {
    let matches = App::new("Seabattle")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Single-player battleship target practice against a hidden fleet.")
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed for the fleet layout, for reproducible games")
                .takes_value(true),
        )
        .get_matches();

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = choose_rng(&matches);

    let mut board = Board::new(random_fleet(&mut rng));
    println!(
        "A hidden fleet of {} ships is somewhere on the {}x{} grid.",
        board.placements().len(),
        BOARD_SIZE,
        BOARD_SIZE,
    );
    println!("Type fire <row>,<col> to shoot. Type help or ? for commands.");

    enum Command {
        Fire(usize, usize),
        Show,
        Help,
        Quit,
    }

    let mut shots = 0usize;
    loop {
        println!();
        /// Matcher for fire commands. The verb may be omitted.
        static FIRE: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^(?x)(?:fire|shoot)?\s*
        (?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<col>[0-9]+)$",
            )
            .unwrap()
        });

        let cmd = input.read_input_lower("> ", |input| match input {
            "?" | "help" | "h" => Some(Command::Help),
            "show" | "board" => Some(Command::Show),
            "quit" | "exit" | "q" => Some(Command::Quit),
            other => {
                if let Some(captures) = FIRE.captures(other) {
                    let row = match captures.name("row").unwrap().as_str().parse() {
                        Ok(row) if row < BOARD_SIZE => row,
                        _ => {
                            println!("row must be a number in range [0,{}]", BOARD_SIZE - 1);
                            return None;
                        }
                    };
                    let col = match captures.name("col").unwrap().as_str().parse() {
                        Ok(col) if col < BOARD_SIZE => col,
                        _ => {
                            println!("col must be a number in range [0,{}]", BOARD_SIZE - 1);
                            return None;
                        }
                    };
                    Some(Command::Fire(row, col))
                } else {
                    println!("Invalid command \"{}\". Use '?' for help", other);
                    None
                }
            }
        })?;

        match cmd {
            Command::Fire(row, col) => {
                shots += 1;
                let outcome = board.fire((row, col));
                println!("{}", outcome);
                if board.all_sunk() {
                    println!();
                    println!("{}", board);
                    println!("The fleet is destroyed. {} shots fired.", shots);
                    break;
                }
            }
            Command::Show => println!("{}", board),
            Command::Help => {
                println!(
                    "Available Commands:
    fire <row>,<col>  shoot the given cell; the verb may be omitted.
    show              print the board, revealing the fleet.
    help              show this message.
    quit              give up and exit."
                );
            }
            Command::Quit => break,
        }
    }
    Ok(())
}

/// Pick the fleet rng, seeded from the command line when requested.
fn choose_rng(matches: &ArgMatches) -> StdRng {
    match matches.value_of("seed") {
        Some(seed) => match seed.parse() {
            Ok(seed) => StdRng::seed_from_u64(seed),
            Err(_) => {
                eprintln!("invalid seed: {}", seed);
                std::process::exit(1);
            }
        },
        None => StdRng::from_entropy(),
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
