use crate::source::JserviceSource;
use crate::utils::js_random_seed;
use clueboard_core as board;
use yew::prelude::*;

/// Lifecycle of the round currently on screen.
#[derive(Clone, Debug, PartialEq)]
enum RoundPhase {
    /// Nothing fetched yet, waiting for the first start
    Idle,
    /// A build is in flight, the grid is replaced by a spinner
    Loading,
    /// A full board is installed and playable
    Ready,
    /// The last build failed; no partial grid is ever shown
    Failed(board::BoardError),
}

#[derive(Clone, Debug)]
pub(crate) enum Msg {
    StartRound,
    RoundLoaded(
        board::RoundToken,
        Result<board::Board, board::BoardError>,
    ),
    ClueClicked(board::Slot),
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Fixed sampler seed (from the URL hash), mostly for debugging.
    #[prop_or_default]
    pub forced_seed: Option<u64>,
}

/// Text a grid cell shows for a clue in its current reveal state.
fn cell_text(clue: &board::Clue) -> &str {
    use board::RevealState::*;
    match clue.reveal() {
        Hidden => "?",
        ShowingQuestion => clue.question(),
        ShowingAnswer => clue.answer(),
    }
}

const fn reveal_class(state: board::RevealState) -> &'static str {
    use board::RevealState::*;
    match state {
        Hidden => "hidden",
        ShowingQuestion => "question",
        ShowingAnswer => "answer",
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    slot: board::Slot,
    text: AttrValue,
    reveal: board::RevealState,
    callback: Callback<board::Slot>,
}

#[function_component(CellView)]
fn cell_view(props: &CellProps) -> Html {
    let CellProps {
        slot,
        text,
        reveal,
        callback,
    } = props.clone();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("clue {:?} clicked", slot);
        callback.emit(slot);
    });

    html! {
        <td class={classes!("clue", reveal_class(reveal))} {onclick}>{ text }</td>
    }
}

pub(crate) struct GameView {
    controller: board::RoundController,
    phase: RoundPhase,
}

impl GameView {
    fn start_round(&mut self, ctx: &Context<Self>) {
        let token = self.controller.begin_round();
        self.phase = RoundPhase::Loading;

        let config = self.controller.config();
        let seed = ctx.props().forced_seed.unwrap_or_else(js_random_seed);
        let link = ctx.link().clone();
        wasm_bindgen_futures::spawn_local(async move {
            let source = JserviceSource::default();
            let result =
                board::run_round(config, &source, board::ShuffleSampler::new(seed)).await;
            link.send_message(Msg::RoundLoaded(token, result));
        });
    }

    fn view_phase(&self, ctx: &Context<Self>) -> Html {
        match &self.phase {
            RoundPhase::Idle => html! {},
            RoundPhase::Loading => html! { <div class="loader"/> },
            RoundPhase::Failed(err) => html! {
                <p class="error">{ format!("Could not build a new board: {err}") }</p>
            },
            RoundPhase::Ready => self.view_board(ctx),
        }
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let Some(board) = self.controller.board() else {
            return html! {};
        };

        html! {
            <table>
                <thead>
                    <tr>
                        {
                            for board.categories().iter().map(|category| html! {
                                <th>{ category.title() }</th>
                            })
                        }
                    </tr>
                </thead>
                <tbody>
                    {
                        for (0..board.clues_per_category()).map(|row| html! {
                            <tr>
                                {
                                    for board.categories().iter().enumerate().filter_map(|(col, category)| {
                                        let slot = (col, row);
                                        let clue = category.clues().get(row)?;
                                        let callback = ctx.link().callback(Msg::ClueClicked);
                                        Some(html! {
                                            <CellView
                                                {slot}
                                                text={cell_text(clue).to_string()}
                                                reveal={clue.reveal()}
                                                {callback}
                                            />
                                        })
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            controller: board::RoundController::new(board::BoardConfig::default()),
            phase: RoundPhase::Idle,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::StartRound => {
                self.start_round(ctx);
                true
            }
            Msg::RoundLoaded(token, Ok(board)) => {
                if self.controller.install_board(token, board) {
                    self.phase = RoundPhase::Ready;
                    true
                } else {
                    false
                }
            }
            Msg::RoundLoaded(token, Err(err)) => {
                if self.controller.is_current(token) {
                    log::error!("round build failed: {err}");
                    self.phase = RoundPhase::Failed(err);
                    true
                } else {
                    log::debug!("ignoring failure of a superseded round: {err}");
                    false
                }
            }
            Msg::ClueClicked(slot) => match self.controller.activate(slot) {
                Ok((state, outcome)) => {
                    log::debug!("clue {:?} now {:?}", slot, state);
                    outcome.has_update()
                }
                Err(err) => {
                    log::debug!("activation rejected: {err}");
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let label = if matches!(self.phase, RoundPhase::Idle) {
            "Start Game"
        } else {
            "Restart Game"
        };
        let cb_restart = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::StartRound
        });

        html! {
            <div class="clueboard">
                <button class="restart" onclick={cb_restart}>{ label }</button>
                { self.view_phase(ctx) }
            </div>
        }
    }
}
