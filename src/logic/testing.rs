//! Test doubles for the pipeline's collaborators.

use crate::difficulty::{CalcError, DifficultyCalculator, PerformanceQuery};
use crate::network::{ChartSource, FetchError};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedChart;

#[derive(Debug, Default)]
struct Calls {
    max_combo: usize,
    last_mods: Option<u32>,
    performance: Vec<PerformanceQuery>,
}

/// Calculator returning canned answers and recording what it was asked.
#[derive(Debug)]
pub struct ScriptedCalculator {
    parse: Result<(), CalcError>,
    panics: bool,
    delay: Option<Duration>,
    object_count: u32,
    max_combo: Result<u32, CalcError>,
    performance: Result<f64, CalcError>,
    calls: Mutex<Calls>,
}

impl Default for ScriptedCalculator {
    fn default() -> Self {
        Self {
            parse: Ok(()),
            panics: false,
            delay: None,
            object_count: 500,
            max_combo: Ok(1000),
            performance: Ok(250.0),
            calls: Mutex::new(Calls::default()),
        }
    }
}

impl ScriptedCalculator {
    pub fn with_parse(mut self, parse: Result<(), CalcError>) -> Self {
        self.parse = parse;
        self
    }

    pub fn with_object_count(mut self, count: u32) -> Self {
        self.object_count = count;
        self
    }

    pub fn with_max_combo(mut self, max_combo: Result<u32, CalcError>) -> Self {
        self.max_combo = max_combo;
        self
    }

    pub fn with_performance(mut self, performance: Result<f64, CalcError>) -> Self {
        self.performance = performance;
        self
    }

    /// Panics while parsing, like a library bug would.
    pub fn panicking(mut self) -> Self {
        self.panics = true;
        self
    }

    /// Blocks the calling thread before parsing, like a slow chart would.
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn max_combo_calls(&self) -> usize {
        self.calls.lock().unwrap().max_combo
    }

    pub fn last_mods(&self) -> Option<u32> {
        self.calls.lock().unwrap().last_mods
    }

    pub fn performance_queries(&self) -> Vec<PerformanceQuery> {
        self.calls.lock().unwrap().performance.clone()
    }
}

impl DifficultyCalculator for ScriptedCalculator {
    type Chart = ScriptedChart;

    fn id(&self) -> &str {
        "scripted"
    }

    fn parse_chart(&self, _bytes: &[u8]) -> Result<ScriptedChart, CalcError> {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }

        if self.panics {
            panic!("scripted calculator panic");
        }

        self.parse.clone().map(|_| ScriptedChart)
    }

    fn object_count(&self, _chart: &ScriptedChart) -> u32 {
        self.object_count
    }

    fn max_combo(&self, _chart: &ScriptedChart, mods: u32) -> Result<u32, CalcError> {
        let mut calls = self.calls.lock().unwrap();
        calls.max_combo += 1;
        calls.last_mods = Some(mods);
        self.max_combo.clone()
    }

    fn performance(&self, _chart: &ScriptedChart, query: &PerformanceQuery) -> Result<f64, CalcError> {
        self.calls.lock().unwrap().performance.push(*query);
        self.performance.clone()
    }
}

/// Chart source answering with a fixed result, optionally after a delay.
#[derive(Debug, Clone)]
pub struct FakeChartSource {
    result: Result<Vec<u8>, FetchError>,
    delay: Option<Duration>,
}

impl FakeChartSource {
    pub fn ok() -> Self {
        Self {
            result: Ok(b"osu file format v14".to_vec()),
            delay: None,
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(FetchError::Transport("connection refused".to_string())),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl ChartSource for FakeChartSource {
    async fn fetch_chart(&self, _chart_id: u32) -> Result<Vec<u8>, FetchError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.result.clone()
    }
}
