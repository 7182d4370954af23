use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct AnalysisConfig {
    /// Season year (keep in mind the 3-point line arrived in '79)
    #[arg(long, default_value_t = 2022)]
    pub year: i32,

    /// Minimum games played to qualify (41 suits a half-season view)
    #[arg(long, default_value_t = 58)]
    pub min_games: u32,

    /// How many of the leading scorers to keep
    #[arg(long, default_value_t = 25)]
    pub top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            year: 2022,
            min_games: 58,
            top_n: 25,
        }
    }
}
