use crate::analysis::recap::PlayerRecap;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ChampionRow {
    rank: String,
    champion: String,
    games: String,
    #[tabled(rename = "win rate")]
    win_rate: String,
    #[tabled(rename = "KDA")]
    kda: String,
    #[tabled(rename = "avg dmg")]
    avg_damage: String,
}

#[derive(Tabled)]
struct TrendRow {
    month: String,
    games: String,
    #[tabled(rename = "win rate")]
    win_rate: String,
    #[tabled(rename = "KDA")]
    kda: String,
}

#[derive(Tabled)]
struct RoleRow {
    role: String,
    games: String,
}

#[derive(Tabled)]
struct PeriodRow {
    period: String,
    games: String,
    #[tabled(rename = "win rate")]
    win_rate: String,
    #[tabled(rename = "KDA")]
    kda: String,
    #[tabled(rename = "avg K/D/A")]
    avg_kda: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_recap(recap: &PlayerRecap, player: &str, top_n: usize) {
    display_overview(recap, player);
    display_highlights(recap);
    display_top_champions(recap, top_n);
    display_roles(recap);
    display_monthly_trends(recap);
    display_growth(recap);
    display_profile(recap);
}

fn display_overview(recap: &PlayerRecap, player: &str) {
    let o = &recap.overview;

    println!(
        "\n{}",
        format!("🎮 Year-End Recap for {}", player).bold().cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    println!(
        "{} {} games | {} W / {} L ({:.2}% WR)",
        "📈 Overall:".bold(),
        o.total_games,
        o.wins.to_string().green(),
        o.losses.to_string().red(),
        o.win_rate
    );
    println!(
        "   KDA {:.2} ({:.1}/{:.1}/{:.1} per game)",
        o.kda, o.averages.kills, o.averages.deaths, o.averages.assists
    );
    println!(
        "   Avg damage {} | gold {} | CS {} | vision {} | game time {} min",
        o.averages.damage,
        o.averages.gold,
        o.averages.cs,
        o.averages.vision_score,
        o.averages.game_time_minutes
    );
}

fn display_highlights(recap: &PlayerRecap) {
    let h = &recap.highlights;

    println!("\n{}", "🌟 HIGHLIGHTS".bold().yellow());
    println!(
        "   Pentakills: {} | Quadras: {} | Triples: {} | Doubles: {}",
        h.penta_kills, h.quadra_kills, h.triple_kills, h.double_kills
    );
    println!(
        "   First bloods: {} | Longest game: {} min | Shortest game: {} min",
        h.first_bloods, h.longest_game_minutes, h.shortest_game_minutes
    );
}

fn display_top_champions(recap: &PlayerRecap, top_n: usize) {
    println!("\n{}", "🏆 TOP CHAMPIONS".bold().cyan());

    if recap.top_champions.is_empty() {
        println!("{}", "No champion data available".yellow());
        return;
    }

    let rows: Vec<ChampionRow> = recap
        .top_champions
        .iter()
        .take(top_n)
        .enumerate()
        .map(|(idx, c)| ChampionRow {
            rank: format!("#{}", idx + 1),
            champion: c.name.clone(),
            games: c.games.to_string(),
            win_rate: format!("{:.1}%", c.win_rate),
            kda: format!("{:.2}", c.kda),
            avg_damage: c.avg_damage.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

fn display_roles(recap: &PlayerRecap) {
    println!("\n{}", "🗺️ ROLE DISTRIBUTION".bold().cyan());

    let d = &recap.role_distribution;
    let rows = vec![
        RoleRow { role: "TOP".to_string(), games: d.top.to_string() },
        RoleRow { role: "JUNGLE".to_string(), games: d.jungle.to_string() },
        RoleRow { role: "MIDDLE".to_string(), games: d.middle.to_string() },
        RoleRow { role: "BOTTOM".to_string(), games: d.bottom.to_string() },
        RoleRow { role: "UTILITY".to_string(), games: d.utility.to_string() },
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    println!("   Favorite role: {}", recap.favorite_role.to_string().bold());
}

fn display_monthly_trends(recap: &PlayerRecap) {
    if recap.monthly_trends.is_empty() {
        return;
    }

    println!("\n{}", "📅 MONTHLY TRENDS".bold().cyan());

    let rows: Vec<TrendRow> = recap
        .monthly_trends
        .iter()
        .map(|t| TrendRow {
            month: t.month.clone(),
            games: t.games.to_string(),
            win_rate: format!("{:.1}%", t.win_rate),
            kda: format!("{:.2}", t.kda),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

fn display_growth(recap: &PlayerRecap) {
    println!("\n{}", "🚀 GROWTH (first 20% vs last 20%)".bold().cyan());

    let rows = vec![
        period_row("early", &recap.early_period),
        period_row("late", &recap.late_period),
    ];
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    let g = &recap.growth;
    println!(
        "   Win rate {} | KDA {} | kills {} | deaths {} | assists {}",
        signed1(g.win_rate_delta),
        signed2(g.kda_delta),
        signed1(g.kills_delta),
        signed1(g.deaths_delta),
        signed1(g.assists_delta)
    );
}

fn period_row(name: &str, stats: &crate::analysis::timeline::PeriodStats) -> PeriodRow {
    PeriodRow {
        period: name.to_string(),
        games: stats.games.to_string(),
        win_rate: format!("{:.1}%", stats.win_rate),
        kda: format!("{:.2}", stats.kda),
        avg_kda: format!(
            "{:.1}/{:.1}/{:.1}",
            stats.avg_kills, stats.avg_deaths, stats.avg_assists
        ),
    }
}

fn display_profile(recap: &PlayerRecap) {
    let pool = &recap.champion_pool;
    let flex = &recap.role_flexibility;
    let trend = &recap.performance_trend;

    println!("\n{}", "🎯 PLAYSTYLE PROFILE".bold().cyan());
    println!(
        "   Champion pool: {} unique | diversity {:.0}/100 | most played {} games ({:.1}%)",
        pool.unique_champions,
        pool.diversity_score,
        pool.most_played_games,
        pool.most_played_percentage
    );
    println!(
        "   Roles played: {} | main role {:.1}% of games | flexibility {:.0}",
        flex.roles_played, flex.main_role_percentage, flex.flexibility_score
    );

    let direction = match trend.direction {
        crate::analysis::timeline::TrendDirection::Improving => "IMPROVING".green().bold(),
        crate::analysis::timeline::TrendDirection::Declining => "DECLINING".red().bold(),
        crate::analysis::timeline::TrendDirection::Stable => "STABLE".yellow().bold(),
    };
    println!(
        "   Trend: {} | recent WR {:.1}% | overall {:.2}% | momentum {}",
        direction,
        trend.recent_win_rate,
        trend.overall_win_rate,
        signed1(trend.momentum)
    );
    println!();
}

fn signed1(value: f64) -> String {
    format!("{:+.1}", value)
}

fn signed2(value: f64) -> String {
    format!("{:+.2}", value)
}
