use crate::config::{SolverConfig, Strategy};
use crate::engine::{RowRetention, TableEngine};
use crate::solver::SubsetSumSolver;
use crate::traits::LayeredProblem;

pub struct TableEngineBuilder<P: LayeredProblem> {
    problem: P,
    retention: Option<RowRetention>,
}

impl<P: LayeredProblem> TableEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            retention: None,
        }
    }
    pub fn with_retention(mut self, retention: RowRetention) -> Self {
        self.retention = Some(retention);
        self
    }
    pub fn build(self) -> TableEngine<P> {
        let retention = self.retention.unwrap_or_default();
        TableEngine::with_retention(self.problem, retention)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SolverBuilder {
    config: SolverConfig,
}

impl SolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }
    pub fn max_table_cells(mut self, limit: usize) -> Self {
        self.config.max_table_cells = limit;
        self
    }
    pub fn build(self) -> SubsetSumSolver {
        SubsetSumSolver::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_TABLE_CELLS;
    use crate::problems::subset_sum::SubsetSumProblem;

    #[test]
    fn engine_defaults_to_rolling() {
        let set = [1, 2];
        let problem = SubsetSumProblem::new(&set, 3).unwrap();
        let engine = TableEngineBuilder::new(problem).build();
        assert_eq!(engine.retention(), RowRetention::Rolling);
    }

    #[test]
    fn engine_full_retention() {
        let set = [1, 2];
        let problem = SubsetSumProblem::new(&set, 3).unwrap();
        let engine = TableEngineBuilder::new(problem)
            .with_retention(RowRetention::Full)
            .build();
        let (hit, rows) = engine.run();
        assert!(hit);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn solver_settings_carry_through() {
        let solver = SolverBuilder::new()
            .strategy(Strategy::Memoized)
            .max_table_cells(64)
            .build();
        assert_eq!(solver.config().strategy, Strategy::Memoized);
        assert_eq!(solver.config().max_table_cells, 64);

        let solver = SolverBuilder::new().build();
        assert_eq!(solver.config().strategy, Strategy::Tabulated);
        assert_eq!(solver.config().max_table_cells, DEFAULT_MAX_TABLE_CELLS);
    }
}
