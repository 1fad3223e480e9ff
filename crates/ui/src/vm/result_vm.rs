use persona_core::model::TraitLetter;
use services::QuizResult;

use crate::vm::time_fmt::format_elapsed;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRowVm {
    pub first: TraitLetter,
    pub second: TraitLetter,
    pub first_percent: u32,
    pub second_percent: u32,
    pub winner: TraitLetter,
}

impl ScoreRowVm {
    #[must_use]
    pub fn first_wins(&self) -> bool {
        self.winner == self.first
    }
}

/// Results page data. The detail fields only render once `unlocked` is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub code: String,
    pub nickname: &'static str,
    pub summary: &'static str,
    pub strengths: &'static str,
    pub growth: &'static str,
    pub work_style: &'static str,
    pub rows: Vec<ScoreRowVm>,
    pub elapsed_str: String,
    pub file_name: String,
    pub unlocked: bool,
}

impl ResultVm {
    pub fn unlock(&mut self) {
        self.unlocked = true;
    }
}

impl From<&QuizResult> for ResultVm {
    fn from(result: &QuizResult) -> Self {
        let profile = result.profile();
        let rows = result
            .scores()
            .iter()
            .map(|score| {
                let (first, second) = score.dimension.poles();
                let (first_percent, second_percent) = score.rounded();
                ScoreRowVm {
                    first,
                    second,
                    first_percent,
                    second_percent,
                    winner: score.winner,
                }
            })
            .collect();

        Self {
            code: result.code().to_string(),
            nickname: profile.nickname,
            summary: profile.summary,
            strengths: profile.strengths,
            growth: profile.growth,
            work_style: profile.work_style,
            rows,
            elapsed_str: format_elapsed(result.elapsed()),
            file_name: services::export_file_name(result.code()),
            unlocked: false,
        }
    }
}

#[must_use]
pub fn map_result(result: &QuizResult) -> ResultVm {
    ResultVm::from(result)
}
