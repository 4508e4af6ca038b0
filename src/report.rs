use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use rand::Rng;

use crate::api::random_hero_id;
use crate::fetch::HeroSource;
use crate::types::{AveragedHero, HeroRecord, PowerStat, Verdict};

/// Mean of the stats that hold a number. Unavailable stats are skipped,
/// not counted as zero.
pub fn average_powerstat(hero: &HeroRecord) -> f64 {
    let (total, count) = hero
        .powerstats
        .values()
        .filter_map(PowerStat::value)
        .fold((0.0_f64, 0_usize), |(total, count), v| {
            (total + v as f64, count + 1)
        });

    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

/// Whole numbers keep their `.0` so `75` prints as `75.0`.
pub fn format_average(average: f64) -> String {
    format!("{average:?}")
}

pub fn write_powerstats<W: Write>(out: &mut W, hero: &HeroRecord) -> std::io::Result<()> {
    writeln!(out, "Powerstats:")?;
    for (name, stat) in &hero.powerstats {
        match stat {
            PowerStat::Value(v) => writeln!(out, "{name}: {v}")?,
            PowerStat::Unavailable(raw) => {
                log::debug!("hero {}: {name} has unusable value {raw:?}", hero.id);
                writeln!(out, "{name}: Invalid or missing value")?
            }
        }
    }
    Ok(())
}

/// Prints one hero block and hands back its average.
pub fn write_hero<W: Write>(
    out: &mut W,
    position: usize,
    hero: &HeroRecord,
) -> std::io::Result<AveragedHero> {
    let header = format!("Hero {position}: {} (ID: {})", hero.name, hero.id);
    writeln!(out, "{}", header.bold())?;
    write_powerstats(out, hero)?;

    let average = average_powerstat(hero);
    writeln!(
        out,
        "Average Powerstat of {}: {}",
        hero.name,
        format_average(average)
    )?;
    writeln!(out)?;

    Ok(AveragedHero {
        id: hero.id,
        name: hero.name.clone(),
        average,
    })
}

pub fn compare(first: &AveragedHero, second: &AveragedHero) -> Verdict {
    if first.average > second.average {
        Verdict::FirstStronger
    } else if second.average > first.average {
        Verdict::SecondStronger
    } else {
        Verdict::Tie
    }
}

pub fn write_verdict<W: Write>(
    out: &mut W,
    first: &AveragedHero,
    second: &AveragedHero,
) -> std::io::Result<Verdict> {
    let verdict = compare(first, second);
    let winner = match verdict {
        Verdict::FirstStronger => Some(first),
        Verdict::SecondStronger => Some(second),
        Verdict::Tie => None,
    };

    match winner {
        Some(hero) => {
            log::debug!("winner is hero {}", hero.id);
            let line = format!(
                "{} is stronger with an average powerstat of {}",
                hero.name,
                format_average(hero.average)
            );
            writeln!(out, "{}", line.green().bold())?;
        }
        None => {
            let line = "Both superheroes have equal average powerstats!";
            writeln!(out, "{}", line.yellow().bold())?;
        }
    }
    Ok(verdict)
}

/// Picks two heroes, fetches both, then prints the duel. Nothing is written
/// unless both fetches succeed.
pub async fn run<S, R, W>(source: &S, rng: &mut R, out: &mut W) -> Result<Verdict>
where
    S: HeroSource,
    R: Rng + ?Sized,
    W: Write,
{
    let first_id = random_hero_id(rng);
    let second_id = random_hero_id(rng);
    log::info!("dueling heroes {first_id} and {second_id}");

    let first = source.fetch_hero(first_id).await?;
    let second = source.fetch_hero(second_id).await?;

    let first = write_hero(out, 1, &first)?;
    let second = write_hero(out, 2, &second)?;
    let verdict = write_verdict(out, &first, &second)?;
    out.flush()?;

    log::debug!("verdict: {verdict:?}");
    Ok(verdict)
}
