mod generate;
mod walk_regimes;
