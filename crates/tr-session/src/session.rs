//! The round controller.
//!
//! `TriviaSession` owns one play-through: the dealt run, the scoring state,
//! the choices on screen, and the lifeline plumbing. Every transition takes
//! `&mut self`, so events are applied one at a time.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use tr_core::{Question, RunGenerator, RunSequence};

use crate::config::GameConfig;
use crate::error::{SessionError, SessionResult};
use crate::event::Event;
use crate::lifeline::{CallOutcome, Lifeline, PendingCall, reduce_options};
use crate::oracle::{Oracle, OracleRequest};
use crate::projection::{Controls, RenderProjection};
use crate::state::{EndReason, Phase, Restored, SessionState, Tick};
use crate::theme::Theme;

/// How a submitted answer was judged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The choice was right.
    Correct {
        /// Points added to the score.
        points: u32,
        /// Lifelines won back by this answer.
        restored: Restored,
    },
    /// The choice was wrong; the game is over.
    Incorrect {
        /// The right answer.
        answer: String,
    },
}

/// One player's trivia game.
pub struct TriviaSession {
    generator: RunGenerator,
    oracle: Arc<dyn Oracle>,
    config: GameConfig,
    state: SessionState,
    run: Option<RunSequence>,
    choices: Vec<String>,
    feedback: Option<String>,
    hint: Option<String>,
    rng: StdRng,
}

impl TriviaSession {
    /// Create a session in the lobby.
    pub fn new(
        generator: RunGenerator,
        oracle: Arc<dyn Oracle>,
        config: GameConfig,
    ) -> SessionResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            generator,
            oracle,
            config,
            state: SessionState::new(),
            run: None,
            choices: Vec::new(),
            feedback: None,
            hint: None,
            rng,
        })
    }

    /// Get the scoring state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Get the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the active theme.
    pub fn theme(&self) -> &'static Theme {
        self.config.theme.theme()
    }

    /// The dealt run, once started.
    pub fn run(&self) -> Option<&RunSequence> {
        self.run.as_ref()
    }

    /// The question on screen, if any.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state.phase {
            Phase::AwaitingAnswer | Phase::Correct => self
                .run
                .as_ref()
                .and_then(|run| run.get(self.state.current_index)),
            _ => None,
        }
    }

    /// The choices on offer for the current question.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Rules text with the configured numbers.
    pub fn rules(&self) -> String {
        self.theme().rules(
            self.config.fifty_threshold(),
            self.config.call_threshold(),
            self.config.time_limit,
        )
    }

    /// Deal a fresh run and reset everything. Returns the run length.
    ///
    /// Also serves as restart; an empty run ends the game immediately.
    pub fn start(&mut self) -> usize {
        let run = self
            .generator
            .generate(self.config.run_length, &mut self.rng);
        let len = run.len();
        self.run = Some(run);

        self.state.reset(self.config.time_limit);
        self.feedback = None;
        self.hint = None;
        self.load_choices();

        if len == 0 {
            self.state.finish(EndReason::Exhausted);
        }
        tracing::info!(questions = len, round = self.state.round, "game started");
        len
    }

    /// Submit a choice for the current question.
    pub fn submit(&mut self, choice: Option<&str>) -> SessionResult<Verdict> {
        match self.state.phase {
            Phase::Lobby => return Err(SessionError::NotStarted),
            Phase::GameOver(_) => return Err(SessionError::GameOver),
            Phase::Correct => return Err(SessionError::InvalidSelection),
            Phase::AwaitingAnswer => {}
        }

        let choice = match choice {
            Some(c) if !c.is_empty() && self.choices.iter().any(|o| o == c) => c,
            _ => {
                self.feedback = Some("Please pick an option.".to_string());
                return Err(SessionError::InvalidSelection);
            }
        };

        let question = self.question_at_cursor()?;
        let points = question.points();
        let answer = question.answer.clone();

        if choice == answer {
            let restored = self.state.record_correct(
                points,
                self.config.fifty_threshold(),
                self.config.call_threshold(),
            );

            let theme = self.theme();
            let mut messages = vec!["Correct!".to_string()];
            if restored.fifty {
                messages.push(format!("{} restored!", theme.fifty_name));
            }
            if restored.call {
                messages.push(format!("{} restored!", theme.call_name));
            }
            self.feedback = Some(messages.join("  "));

            tracing::debug!(
                points,
                score = self.state.score,
                streak = self.state.streak_score,
                "correct answer"
            );
            Ok(Verdict::Correct { points, restored })
        } else {
            self.state.record_incorrect();
            self.feedback = Some(format!("Wrong! The answer was {answer}."));
            tracing::info!(score = self.state.score, "game over: wrong answer");
            Ok(Verdict::Incorrect { answer })
        }
    }

    /// One second of the countdown. Late ticks are ignored.
    pub fn tick(&mut self) -> Tick {
        let tick = self.state.tick();
        if tick == Tick::Expired {
            self.feedback = Some("Time's up!".to_string());
            tracing::info!(score = self.state.score, "game over: time ran out");
        }
        tick
    }

    /// Move to the next question after a correct answer.
    pub fn advance(&mut self) -> SessionResult<()> {
        match self.state.phase {
            Phase::Lobby => return Err(SessionError::NotStarted),
            Phase::GameOver(_) => return Err(SessionError::GameOver),
            Phase::AwaitingAnswer => return Err(SessionError::RoundUnresolved),
            Phase::Correct => {}
        }

        let next = self.state.current_index + 1;
        let len = self.run.as_ref().map_or(0, RunSequence::len);
        self.hint = None;

        if next >= len {
            self.state.finish(EndReason::Exhausted);
            self.choices.clear();
            self.feedback = None;
            tracing::info!(score = self.state.score, "game over: run complete");
            return Ok(());
        }

        self.state.present(next, self.config.time_limit);
        self.feedback = None;
        self.load_choices();
        tracing::debug!(index = next, round = self.state.round, "next question");
        Ok(())
    }

    /// Use the fifty lifeline. Returns the reduced choices.
    pub fn use_fifty(&mut self) -> SessionResult<&[String]> {
        self.ensure_awaiting()?;
        if self.state.fifty_used {
            return Err(SessionError::LifelineUnavailable(Lifeline::Fifty));
        }

        let answer = self.question_at_cursor()?.answer.clone();
        let reduced = reduce_options(&self.choices, &answer, &mut self.rng)?;
        self.choices = reduced;
        self.state.fifty_used = true;

        let name = self.theme().fifty_name;
        self.feedback = Some(if self.state.break_streak() {
            format!("{name} used, streak broken")
        } else {
            format!("{name} used")
        });
        tracing::debug!(round = self.state.round, "fifty lifeline used");
        Ok(&self.choices)
    }

    /// Spend the call lifeline and hand back the oracle request to run.
    ///
    /// The lifeline counts as used from this point, whatever the oracle
    /// later returns.
    pub fn request_call(&mut self) -> SessionResult<PendingCall> {
        self.ensure_awaiting()?;
        if self.state.call_used {
            return Err(SessionError::LifelineUnavailable(Lifeline::Call));
        }

        let persona = self
            .theme()
            .personas
            .choose(&mut self.rng)
            .map_or("A friend", |p| p.name);
        let question = self.question_at_cursor()?;
        let request = OracleRequest {
            persona: persona.to_string(),
            question: question.text.clone(),
            options: question.options.clone(),
            answer: question.answer.clone(),
        };

        self.state.call_used = true;
        self.hint = Some(format!("Calling {persona}..."));
        tracing::debug!(round = self.state.round, persona, "call lifeline used");
        Ok(PendingCall::new(
            self.state.round,
            request,
            Arc::clone(&self.oracle),
        ))
    }

    /// Show a finished call's hint if it belongs to the question on screen.
    ///
    /// Returns `false` when the outcome is stale and was dropped.
    pub fn complete_call(&mut self, outcome: &CallOutcome) -> bool {
        let current = matches!(self.state.phase, Phase::AwaitingAnswer | Phase::Correct)
            && outcome.round == self.state.round;
        if !current {
            tracing::debug!(
                outcome_round = outcome.round,
                round = self.state.round,
                "dropping stale call outcome"
            );
            return false;
        }
        self.hint = Some(outcome.hint_text());
        true
    }

    /// Spend the call lifeline and wait for the oracle in place.
    pub fn call_now(&mut self) -> SessionResult<CallOutcome> {
        let outcome = self.request_call()?.run();
        self.complete_call(&outcome);
        Ok(outcome)
    }

    /// Apply one event and return what to draw.
    ///
    /// Errors never escape; they become the feedback line. `Event::Call`
    /// waits for the oracle; use [`request_call`](Self::request_call) to
    /// keep it off the event loop.
    pub fn dispatch(&mut self, event: Event) -> RenderProjection {
        let result = match event {
            Event::Start | Event::Restart => {
                self.start();
                Ok(())
            }
            Event::Submit(choice) => self.submit(choice.as_deref()).map(|_| ()),
            Event::Fifty => self.use_fifty().map(|_| ()),
            Event::Call => self.call_now().map(|_| ()),
            Event::Advance => self.advance(),
            Event::Tick => {
                self.tick();
                Ok(())
            }
        };

        if let Err(e) = result {
            self.feedback = Some(self.notice(&e));
        }
        self.projection()
    }

    /// Build the renderable snapshot of the current state.
    pub fn projection(&self) -> RenderProjection {
        let s = &self.state;
        let total = self.run.as_ref().map_or(0, RunSequence::len);
        let question = self.current_question();

        let heading = match (s.phase, question) {
            (Phase::Lobby, _) => self.theme().title.to_string(),
            (Phase::GameOver(_), _) => {
                format!("Game Over! Your final score: {}", s.score)
            }
            (_, Some(q)) => format!("Q{}: {}", s.current_index + 1, q.text),
            (_, None) => String::new(),
        };

        let timer_text = if s.timer_running {
            format!("Time: {}", s.time_remaining)
        } else if s.phase == Phase::GameOver(EndReason::TimedOut) {
            "Time: 0".to_string()
        } else {
            "Time: --".to_string()
        };

        let options = match s.phase {
            Phase::AwaitingAnswer | Phase::Correct => self.choices.clone(),
            _ => Vec::new(),
        };

        RenderProjection {
            phase: s.phase,
            heading,
            question_number: question.map_or(0, |_| s.current_index + 1),
            total_questions: total,
            options,
            difficulty: question.map(|q| q.difficulty),
            score: s.score,
            score_text: format!("Score: {}", s.score),
            streak_text: s.streak_text(),
            timer_text,
            feedback: self.feedback.clone(),
            hint: self.hint.clone(),
            controls: Controls::for_phase(s.phase, s.fifty_used, s.call_used),
        }
    }

    fn notice(&self, err: &SessionError) -> String {
        let theme = self.theme();
        match err {
            SessionError::InvalidSelection => "Please pick an option.".to_string(),
            SessionError::NotEnoughOptions => "Not enough options".to_string(),
            SessionError::LifelineUnavailable(Lifeline::Fifty) => {
                format!("{} already used", theme.fifty_name)
            }
            SessionError::LifelineUnavailable(Lifeline::Call) => {
                format!("{} already used", theme.call_name)
            }
            other => other.to_string(),
        }
    }

    fn ensure_awaiting(&self) -> SessionResult<()> {
        match self.state.phase {
            Phase::AwaitingAnswer => Ok(()),
            Phase::Lobby => Err(SessionError::NotStarted),
            Phase::Correct => Err(SessionError::RoundResolved),
            Phase::GameOver(_) => Err(SessionError::GameOver),
        }
    }

    fn question_at_cursor(&self) -> SessionResult<&Question> {
        self.run
            .as_ref()
            .and_then(|run| run.get(self.state.current_index))
            .ok_or(SessionError::GameOver)
    }

    fn load_choices(&mut self) {
        self.choices = self
            .run
            .as_ref()
            .and_then(|run| run.get(self.state.current_index))
            .map(|q| q.options.clone())
            .unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{OracleError, PersonaOracle};
    use crate::theme::ThemeKind;
    use tr_core::{Difficulty, QuestionPool};

    fn question(text: &str, tier: Difficulty, options: &[&str]) -> Question {
        Question::new(
            text,
            options.iter().map(|s| s.to_string()).collect(),
            options[0],
            tier,
        )
        .unwrap()
    }

    /// Four-option questions whose answer is always the first option.
    fn pool_of(tiers: &[Difficulty]) -> Arc<QuestionPool> {
        let questions = tiers
            .iter()
            .enumerate()
            .map(|(i, t)| question(&format!("Question {i}"), *t, &["Right", "W1", "W2", "W3"]))
            .collect();
        Arc::new(QuestionPool::new(questions))
    }

    fn session_with(pool: Arc<QuestionPool>, config: GameConfig) -> TriviaSession {
        let oracle = Arc::new(PersonaOracle::new(config.theme));
        TriviaSession::new(RunGenerator::new(pool), oracle, config.with_seed(7)).unwrap()
    }

    fn started(tiers: &[Difficulty]) -> TriviaSession {
        let mut s = session_with(pool_of(tiers), GameConfig::for_theme(ThemeKind::Fighter));
        s.start();
        s
    }

    fn answer_right(s: &mut TriviaSession) -> Verdict {
        s.submit(Some("Right")).unwrap()
    }

    fn spend_both(s: &mut TriviaSession) {
        s.use_fifty().unwrap();
        s.call_now().unwrap();
    }

    #[test]
    fn lobby_rejects_play() {
        let mut s = session_with(pool_of(&[Difficulty::Easy]), GameConfig::default());
        assert_eq!(s.submit(Some("Right")), Err(SessionError::NotStarted));
        assert_eq!(s.advance(), Err(SessionError::NotStarted));
        assert_eq!(s.tick(), Tick::Ignored);
        let p = s.projection();
        assert_eq!(p.phase, Phase::Lobby);
        assert!(p.controls.start);
        assert!(p.heading.contains("TriWizard"));
    }

    #[test]
    fn start_presents_first_question() {
        let s = started(&[Difficulty::Easy, Difficulty::Hard]);
        let p = s.projection();
        assert_eq!(p.phase, Phase::AwaitingAnswer);
        assert_eq!(p.question_number, 1);
        assert_eq!(p.total_questions, 2);
        assert_eq!(p.options.len(), 4);
        assert_eq!(p.timer_text, "Time: 40");
        assert!(p.heading.starts_with("Q1: Question "));
        assert!(p.controls.submit && p.controls.fifty && p.controls.call);
        assert!(!p.controls.next);
    }

    #[test]
    fn correct_answer_scores_tier_points() {
        for tier in Difficulty::ALL {
            let mut s = started(&[tier]);
            let verdict = answer_right(&mut s);
            assert_eq!(
                verdict,
                Verdict::Correct {
                    points: tier.points(),
                    restored: Restored::default()
                }
            );
            assert_eq!(s.state().score, tier.points());
            assert!(s.state().answered);
            assert!(!s.state().timer_running);
            assert!(s.projection().controls.next);
        }
    }

    #[test]
    fn three_right_then_wrong() {
        let mut s = started(&[Difficulty::Easy, Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]);
        let mut expected = 0;
        for _ in 0..3 {
            expected += s.current_question().unwrap().points();
            answer_right(&mut s);
            s.advance().unwrap();
        }
        let score = s.state().score;
        assert_eq!(score, expected);

        let verdict = s.submit(Some("W2")).unwrap();
        assert_eq!(
            verdict,
            Verdict::Incorrect {
                answer: "Right".to_string()
            }
        );
        assert_eq!(s.state().score, score);
        assert!(!s.state().streak_active);
        assert_eq!(s.state().phase, Phase::GameOver(EndReason::Incorrect));

        let p = s.projection();
        assert!(p.controls.restart);
        assert!(!p.controls.next);
        assert_eq!(p.feedback.as_deref(), Some("Wrong! The answer was Right."));
        assert_eq!(p.heading, format!("Game Over! Your final score: {score}"));
    }

    #[test]
    fn full_run_scores_sum_of_tiers() {
        let mut s = started(&[Difficulty::Easy, Difficulty::Easy, Difficulty::Medium]);
        for _ in 0..3 {
            answer_right(&mut s);
            s.advance().unwrap();
        }
        assert_eq!(s.state().score, 4);
        assert_eq!(s.state().phase, Phase::GameOver(EndReason::Exhausted));
    }

    #[test]
    fn empty_selection_is_rejected_without_change() {
        let mut s = started(&[Difficulty::Easy]);
        let before = s.state().clone();
        assert_eq!(s.submit(None), Err(SessionError::InvalidSelection));
        assert_eq!(s.submit(Some("")), Err(SessionError::InvalidSelection));
        assert_eq!(s.submit(Some("Not offered")), Err(SessionError::InvalidSelection));
        assert_eq!(s.state(), &before);
        let p = s.projection();
        assert!(p.controls.submit);
        assert_eq!(p.feedback.as_deref(), Some("Please pick an option."));
    }

    #[test]
    fn second_submit_is_rejected() {
        let mut s = started(&[Difficulty::Easy, Difficulty::Easy]);
        answer_right(&mut s);
        assert_eq!(s.submit(Some("Right")), Err(SessionError::InvalidSelection));
        assert_eq!(s.state().score, 1);
    }

    #[test]
    fn game_over_is_terminal() {
        let mut s = started(&[Difficulty::Easy, Difficulty::Easy]);
        s.submit(Some("W1")).unwrap();
        assert_eq!(s.advance(), Err(SessionError::GameOver));
        assert_eq!(s.submit(Some("Right")), Err(SessionError::GameOver));
        assert_eq!(s.use_fifty().unwrap_err(), SessionError::GameOver);
        assert_eq!(s.request_call().unwrap_err(), SessionError::GameOver);
        assert_eq!(s.state().current_index, 0);
    }

    #[test]
    fn advance_requires_correct_answer() {
        let mut s = started(&[Difficulty::Easy, Difficulty::Easy]);
        assert_eq!(s.advance(), Err(SessionError::RoundUnresolved));
    }

    #[test]
    fn advance_resets_round() {
        let mut s = started(&[Difficulty::Easy, Difficulty::Easy]);
        for _ in 0..5 {
            s.tick();
        }
        s.use_fifty().unwrap();
        answer_right(&mut s);
        let round = s.state().round;
        s.advance().unwrap();

        let st = s.state();
        assert_eq!(st.current_index, 1);
        assert_eq!(st.time_remaining, 40);
        assert!(st.timer_running);
        assert!(!st.answered);
        assert_eq!(st.round, round + 1);
        assert_eq!(s.choices().len(), 4);
        let p = s.projection();
        assert!(!p.controls.fifty);
        assert!(p.controls.call);
        assert!(p.feedback.is_none());
    }

    #[test]
    fn advancing_past_last_question_ends_game() {
        let mut s = started(&[Difficulty::Expert]);
        answer_right(&mut s);
        s.advance().unwrap();
        assert_eq!(s.state().phase, Phase::GameOver(EndReason::Exhausted));
        assert_eq!(s.state().current_index, 0);
        let p = s.projection();
        assert_eq!(p.heading, "Game Over! Your final score: 4");
        assert!(p.options.is_empty());
        assert!(p.controls.restart);
        assert!(!p.controls.call);
    }

    #[test]
    fn restart_resets_everything() {
        let mut s = started(&[Difficulty::Easy, Difficulty::Easy, Difficulty::Easy]);
        spend_both(&mut s);
        answer_right(&mut s);
        s.advance().unwrap();
        s.submit(Some("W1")).unwrap();

        let len = s.start();
        assert_eq!(len, 3);
        let st = s.state();
        assert_eq!(st.score, 0);
        assert!(!st.fifty_used && !st.call_used);
        assert!(!st.streak_active);
        assert_eq!(st.current_index, 0);
        assert_eq!(st.phase, Phase::AwaitingAnswer);
        assert!(s.projection().hint.is_none());
    }

    #[test]
    fn empty_pool_ends_immediately() {
        let mut s = session_with(Arc::new(QuestionPool::default()), GameConfig::default());
        assert_eq!(s.start(), 0);
        assert_eq!(s.state().phase, Phase::GameOver(EndReason::Exhausted));
        assert_eq!(s.projection().heading, "Game Over! Your final score: 0");
    }

    #[test]
    fn run_length_from_config() {
        let tiers = vec![Difficulty::Easy; 25];
        let mut s = session_with(pool_of(&tiers), GameConfig::default().with_run_length(12));
        assert_eq!(s.start(), 12);
    }

    #[test]
    fn timeout_ends_game_without_scoring() {
        let mut s = session_with(
            pool_of(&[Difficulty::Easy, Difficulty::Easy]),
            GameConfig::default().with_time_limit(3),
        );
        s.start();
        assert_eq!(s.tick(), Tick::Counting(2));
        assert_eq!(s.tick(), Tick::Counting(1));
        assert_eq!(s.tick(), Tick::Expired);

        let st = s.state().clone();
        assert_eq!(st.time_remaining, 0);
        assert_eq!(st.score, 0);
        assert_eq!(st.phase, Phase::GameOver(EndReason::TimedOut));

        // Late ticks change nothing.
        assert_eq!(s.tick(), Tick::Ignored);
        assert_eq!(s.state(), &st);

        let p = s.projection();
        assert_eq!(p.timer_text, "Time: 0");
        assert_eq!(p.feedback.as_deref(), Some("Time's up!"));
        assert!(p.controls.restart);
    }

    #[test]
    fn tick_after_answer_is_noop() {
        let mut s = started(&[Difficulty::Easy, Difficulty::Easy]);
        s.tick();
        answer_right(&mut s);
        let before = s.state().clone();
        for _ in 0..50 {
            assert_eq!(s.tick(), Tick::Ignored);
        }
        assert_eq!(s.state(), &before);
        assert_eq!(s.projection().timer_text, "Time: --");
    }

    #[test]
    fn timeout_resets_streak() {
        let mut s = started(&[Difficulty::Easy, Difficulty::Easy]);
        spend_both(&mut s);
        answer_right(&mut s);
        s.advance().unwrap();
        assert!(s.state().streak_active);
        for _ in 0..40 {
            s.tick();
        }
        assert!(!s.state().streak_active);
        assert_eq!(s.state().streak_score, 0);
    }

    #[test]
    fn fifty_reduces_to_two() {
        let mut s = started(&[Difficulty::Easy]);
        let reduced = s.use_fifty().unwrap().to_vec();
        assert_eq!(reduced.len(), 2);
        assert!(reduced.contains(&"Right".to_string()));
        assert!(s.state().fifty_used);
        assert_eq!(s.projection().options, reduced);
        assert_eq!(s.projection().feedback.as_deref(), Some("50:50 used"));
    }

    #[test]
    fn fifty_rejects_removed_option() {
        let mut s = started(&[Difficulty::Easy]);
        let reduced = s.use_fifty().unwrap().to_vec();
        let gone = ["W1", "W2", "W3"]
            .into_iter()
            .find(|o| !reduced.iter().any(|r| r == o))
            .unwrap();
        assert_eq!(s.submit(Some(gone)), Err(SessionError::InvalidSelection));
    }

    #[test]
    fn fifty_twice_is_unavailable() {
        let mut s = started(&[Difficulty::Easy]);
        s.use_fifty().unwrap();
        assert_eq!(
            s.use_fifty().unwrap_err(),
            SessionError::LifelineUnavailable(Lifeline::Fifty)
        );
        let p = s.dispatch(Event::Fifty);
        assert_eq!(p.feedback.as_deref(), Some("50:50 already used"));
    }

    #[test]
    fn fifty_on_two_options_is_rejected() {
        let pool = Arc::new(QuestionPool::new(vec![question(
            "True or false?",
            Difficulty::Easy,
            &["True", "False"],
        )]));
        let mut s = session_with(pool, GameConfig::default());
        s.start();
        assert_eq!(s.use_fifty().unwrap_err(), SessionError::NotEnoughOptions);
        assert!(!s.state().fifty_used);
        assert_eq!(s.choices(), &["True".to_string(), "False".to_string()]);

        let p = s.dispatch(Event::Fifty);
        assert_eq!(p.feedback.as_deref(), Some("Not enough options"));
        assert!(p.controls.fifty);
    }

    #[test]
    fn lifelines_need_open_round() {
        let mut s = started(&[Difficulty::Easy, Difficulty::Easy]);
        answer_right(&mut s);
        assert_eq!(s.use_fifty().unwrap_err(), SessionError::RoundResolved);
        assert_eq!(s.request_call().unwrap_err(), SessionError::RoundResolved);
    }

    #[test]
    fn call_shows_persona_hint() {
        let mut s = started(&[Difficulty::Easy]);
        let outcome = s.call_now().unwrap();
        assert!(s.state().call_used);
        let hint = s.projection().hint.unwrap();
        assert!(hint.starts_with(&outcome.persona));
        assert!(hint.contains("Right"));
        assert!(ThemeKind::Fighter.theme().persona(&outcome.persona).is_some());
        assert!(!s.projection().controls.call);
    }

    #[test]
    fn call_request_carries_question() {
        let mut s = started(&[Difficulty::Medium]);
        let pending = s.request_call().unwrap();
        let req = pending.request();
        assert_eq!(req.answer, "Right");
        assert_eq!(req.options.len(), 4);
        assert_eq!(req.question, s.current_question().unwrap().text);
        assert_eq!(pending.round(), s.state().round);
        assert_eq!(s.projection().hint, Some(format!("Calling {}...", req.persona)));
    }

    #[test]
    fn call_failure_still_spends_lifeline() {
        let failing = |_: &OracleRequest| -> Result<String, OracleError> {
            Err(OracleError::Unavailable("no signal".to_string()))
        };
        let mut s = TriviaSession::new(
            RunGenerator::new(pool_of(&[Difficulty::Easy])),
            Arc::new(failing),
            GameConfig::default().with_seed(1),
        )
        .unwrap();
        s.start();

        let p = s.dispatch(Event::Call);
        assert_eq!(p.hint.as_deref(), Some("Error: oracle unavailable: no signal"));
        assert!(s.state().call_used);
        assert!(!p.controls.call);
        assert_eq!(p.phase, Phase::AwaitingAnswer);
    }

    #[test]
    fn stale_call_outcome_is_dropped() {
        let mut s = started(&[Difficulty::Easy, Difficulty::Easy]);
        let pending = s.request_call().unwrap();
        answer_right(&mut s);
        s.advance().unwrap();

        let outcome = pending.run();
        assert!(!s.complete_call(&outcome));
        assert!(s.projection().hint.is_none());
    }

    #[test]
    fn call_outcome_after_answer_same_round_is_shown() {
        let mut s = started(&[Difficulty::Easy, Difficulty::Easy]);
        let pending = s.request_call().unwrap();
        answer_right(&mut s);
        assert!(s.complete_call(&pending.run()));
        assert!(s.projection().hint.is_some());
    }

    #[test]
    fn streak_activates_after_both_spent() {
        let mut s = started(&[Difficulty::Hard, Difficulty::Hard]);
        spend_both(&mut s);
        answer_right(&mut s);
        assert!(s.state().streak_active);
        assert_eq!(s.state().streak_score, 0);
        assert_eq!(s.state().score, 3);
        assert_eq!(s.projection().streak_text, "Streak: 0 | Streak Active");
    }

    #[test]
    fn fighter_thresholds_restore_fifty_on_fifth_easy() {
        // Both lifelines spent, then easy answers: the first activates the
        // streak at 0, the next five bring it to 5.
        let tiers = vec![Difficulty::Easy; 8];
        let mut s = started(&tiers);
        spend_both(&mut s);
        answer_right(&mut s);
        s.advance().unwrap();
        assert!(s.state().streak_active);

        for n in 1..=5 {
            let verdict = answer_right(&mut s);
            assert_eq!(s.state().streak_score, n);
            if n < 5 {
                assert!(s.state().fifty_used, "restored early at {n}");
            } else {
                assert_eq!(
                    verdict,
                    Verdict::Correct {
                        points: 1,
                        restored: Restored {
                            fifty: true,
                            call: false
                        }
                    }
                );
            }
            s.advance().unwrap();
        }

        let st = s.state();
        assert!(!st.fifty_used);
        assert!(st.call_used);
        assert!(st.streak_active);
        assert!(s.projection().controls.fifty);
        assert!(!s.projection().controls.call);
    }

    #[test]
    fn restore_message_uses_theme_names() {
        let tiers = vec![Difficulty::Expert; 4];
        let mut s = started(&tiers);
        spend_both(&mut s);
        answer_right(&mut s);
        s.advance().unwrap();
        answer_right(&mut s);
        assert_eq!(s.projection().feedback.as_deref(), Some("Correct!"));
        s.advance().unwrap();
        answer_right(&mut s);
        assert_eq!(
            s.projection().feedback.as_deref(),
            Some("Correct!  50:50 restored!")
        );
    }

    #[test]
    fn fifty_during_streak_breaks_it() {
        let tiers = vec![Difficulty::Expert; 4];
        let mut s = started(&tiers);
        spend_both(&mut s);
        answer_right(&mut s); // streak starts at 0
        s.advance().unwrap();
        answer_right(&mut s); // 4
        s.advance().unwrap();
        answer_right(&mut s); // 8, fifty back
        assert!(!s.state().fifty_used);
        assert!(s.state().streak_active);
        s.advance().unwrap();

        s.use_fifty().unwrap();
        assert!(!s.state().streak_active);
        assert_eq!(s.state().streak_score, 0);
        assert_eq!(
            s.projection().feedback.as_deref(),
            Some("50:50 used, streak broken")
        );
    }

    #[test]
    fn wrong_answer_mid_streak_resets() {
        let tiers = vec![Difficulty::Medium; 3];
        let mut s = started(&tiers);
        spend_both(&mut s);
        answer_right(&mut s);
        s.advance().unwrap();
        answer_right(&mut s);
        assert_eq!(s.state().streak_score, 2);
        s.advance().unwrap();
        s.submit(Some("W3")).unwrap();
        assert!(!s.state().streak_active);
        assert_eq!(s.state().streak_score, 0);
    }

    #[test]
    fn dispatch_round_trip() {
        let mut s = session_with(pool_of(&[Difficulty::Hard]), GameConfig::default());
        let p = s.dispatch(Event::Start);
        assert_eq!(p.phase, Phase::AwaitingAnswer);

        let p = s.dispatch(Event::Submit(None));
        assert_eq!(p.feedback.as_deref(), Some("Please pick an option."));

        let p = s.dispatch(Event::Tick);
        assert_eq!(p.timer_text, "Time: 39");

        let p = s.dispatch(Event::Submit(Some("Right".to_string())));
        assert_eq!(p.score_text, "Score: 3");
        assert_eq!(p.feedback.as_deref(), Some("Correct!"));

        let p = s.dispatch(Event::Advance);
        assert_eq!(p.phase, Phase::GameOver(EndReason::Exhausted));

        let p = s.dispatch(Event::Advance);
        assert_eq!(
            p.feedback.as_deref(),
            Some("the game is over, restart to play again")
        );

        let p = s.dispatch(Event::Restart);
        assert_eq!(p.score, 0);
        assert_eq!(p.phase, Phase::AwaitingAnswer);
    }

    #[test]
    fn rules_use_config() {
        let s = session_with(
            pool_of(&[Difficulty::Easy]),
            GameConfig::for_theme(ThemeKind::Fighter).with_thresholds(7, 21),
        );
        let rules = s.rules();
        assert!(rules.contains("7 pts -> 50:50"));
        assert!(rules.contains("21 pts -> Call a Fighter"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config: GameConfig = serde_json::from_str(r#"{"time_limit": 0}"#).unwrap();
        let result = TriviaSession::new(
            RunGenerator::new(pool_of(&[Difficulty::Easy])),
            Arc::new(PersonaOracle::new(ThemeKind::Wizard)),
            config,
        );
        assert!(matches!(result, Err(SessionError::Config(_))));
    }
}
