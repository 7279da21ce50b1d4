//! Plays one seeded bot-vs-bot round through the public API and prints the
//! bids, every play, and the winner. `--json` emits a machine-readable trace
//! instead.

use landlord_ai::{decide_bid, decide_play, Decision, PlayContext};
use landlord_core::{Combo, GameSession, Seat, SessionError};
use serde::Serialize;
use std::env;

const DEFAULT_SEED: u64 = 0x5EED;

#[derive(Debug, Clone, Copy)]
struct CliOptions {
    seed: u64,
    json: bool,
}

#[derive(Debug, Serialize)]
struct BidRecord {
    seat: &'static str,
    bid: u8,
}

#[derive(Debug, Serialize)]
struct TurnRecord {
    seat: &'static str,
    decision: Decision,
}

#[derive(Debug, Serialize)]
struct RoundReport {
    seed: u64,
    redeals: u32,
    landlord: &'static str,
    stake: u8,
    bids: Vec<BidRecord>,
    turns: Vec<TurnRecord>,
    winner: &'static str,
}

fn main() {
    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: landlord-cli [--seed N] [--json]");
            return;
        }
    };
    if let Err(err) = play_round(options) {
        eprintln!("error: {err}");
    }
}

fn parse_args() -> Result<CliOptions, String> {
    let mut options = CliOptions {
        seed: DEFAULT_SEED,
        json: false,
    };
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                options.seed = value
                    .parse()
                    .map_err(|_| format!("bad seed: {value}"))?;
            }
            "--json" => options.json = true,
            other => return Err(format!("unknown flag: {other}")),
        }
    }
    Ok(options)
}

fn play_round(options: CliOptions) -> Result<(), SessionError> {
    let mut seed = options.seed;
    let mut redeals = 0u32;

    // Both seats passing on the bid re-deals with the next seed, as the
    // original game restarts the round.
    let (mut session, landlord) = loop {
        let mut session = GameSession::deal(seed);
        let player_bid = decide_bid(session.hand(Seat::Player));
        let computer_bid = decide_bid(session.hand(Seat::Computer));
        session.record_bid(Seat::Player, player_bid)?;
        session.record_bid(Seat::Computer, computer_bid)?;
        if player_bid == 0 && computer_bid == 0 {
            seed = seed.wrapping_add(1);
            redeals += 1;
            continue;
        }
        let (landlord, stake) = if computer_bid > player_bid {
            (Seat::Computer, computer_bid)
        } else {
            (Seat::Player, player_bid)
        };
        session.assign_landlord(landlord, stake)?;
        break (session, landlord);
    };

    if !options.json {
        println!("seed {seed} ({redeals} redeals)");
        for (seat, bid) in &session.bids {
            println!("{} bids {bid}", seat_name(*seat));
        }
        println!(
            "{} is the landlord at stake {}",
            seat_name(landlord),
            session.stake
        );
    }

    let mut turns = Vec::new();
    let mut turn = landlord;
    let winner = loop {
        let to_beat = session.to_beat(turn).cloned();
        let ctx = PlayContext::new(session.remaining(turn.opponent()));
        let decision = decide_play(session.hand(turn), to_beat.as_ref(), &ctx);
        match &decision {
            Decision::Play(combo) => {
                session.submit_play(turn, &combo.cards)?;
                if !options.json {
                    println!(
                        "{}: {} ({} left)",
                        seat_name(turn),
                        format_combo(combo),
                        session.remaining(turn)
                    );
                }
            }
            Decision::Pass => {
                session.submit_pass(turn)?;
                if !options.json {
                    println!("{}: pass", seat_name(turn));
                }
            }
        }
        turns.push(TurnRecord {
            seat: seat_name(turn),
            decision,
        });
        if let Some(winner) = session.winner {
            break winner;
        }
        turn = turn.opponent();
    };

    if options.json {
        let report = RoundReport {
            seed,
            redeals,
            landlord: seat_name(landlord),
            stake: session.stake,
            bids: session
                .bids
                .iter()
                .map(|&(seat, bid)| BidRecord {
                    seat: seat_name(seat),
                    bid,
                })
                .collect(),
            turns,
            winner: seat_name(winner),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(body) => println!("{body}"),
            Err(err) => eprintln!("error: {err}"),
        }
    } else {
        println!("{} wins", seat_name(winner));
    }
    Ok(())
}

fn seat_name(seat: Seat) -> &'static str {
    match seat {
        Seat::Player => "player",
        Seat::Computer => "computer",
    }
}

fn format_combo(combo: &Combo) -> String {
    let cards: Vec<String> = combo.cards.iter().map(|card| card.to_string()).collect();
    format!("{} [{}]", combo.kind.label(), cards.join(" "))
}
