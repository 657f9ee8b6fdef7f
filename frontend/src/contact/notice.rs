use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::functional::hook;
use yew::prelude::*;

pub const NOTICE_DISMISS_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// Which form a notice belongs to; it is rendered at the top of that form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Newsletter,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub form: FormKind,
    pub kind: NoticeKind,
    pub text: String,
}

/// The single notice slot shared by the whole page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    current: Option<Notice>,
}

pub enum NoticeAction {
    Show(Notice),
    Expire(u32),
}

impl NoticeBoard {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn for_form(&self, form: FormKind) -> Option<&Notice> {
        self.current().filter(|n| n.form == form)
    }

    pub fn show(&mut self, notice: Notice) {
        self.current = Some(notice);
    }

    /// Clears the slot only if it still holds notice `id`.
    pub fn expire(&mut self, id: u32) -> bool {
        if self.current.as_ref().map(|n| n.id) == Some(id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

impl Reducible for NoticeBoard {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut board = (*self).clone();
        match action {
            NoticeAction::Show(notice) => board.show(notice),
            NoticeAction::Expire(id) => {
                if !board.expire(id) {
                    return self;
                }
            }
        }
        Rc::new(board)
    }
}

/// Runs a task once after a delay. Dropping the returned handle cancels it.
pub trait Schedule {
    type Handle;

    fn after(&self, millis: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

pub struct BrowserSchedule;

impl Schedule for BrowserSchedule {
    type Handle = Timeout;

    fn after(&self, millis: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(millis, task)
    }
}

/// Hands out notice ids and keeps at most one pending dismissal.
pub struct DismissTimer<S: Schedule> {
    schedule: S,
    pending: Option<S::Handle>,
    next_id: u32,
}

impl<S: Schedule> DismissTimer<S> {
    pub fn new(schedule: S) -> Self {
        Self {
            schedule,
            pending: None,
            next_id: 0,
        }
    }

    /// Allocates the next notice id and schedules `expire(id)` after
    /// `NOTICE_DISMISS_MS`, cancelling whatever was pending.
    pub fn arm(&mut self, expire: impl FnOnce(u32) + 'static) -> u32 {
        self.next_id = self.next_id.wrapping_add(1);
        let id = self.next_id;
        let handle = self
            .schedule
            .after(NOTICE_DISMISS_MS, Box::new(move || expire(id)));
        if let Some(previous) = self.pending.replace(handle) {
            drop(previous);
        }
        id
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

pub type NoticeCallback = Callback<(FormKind, NoticeKind, String)>;

/// Notice state plus a callback that shows `(form, kind, text)` and schedules
/// its dismissal. Showing a new notice cancels the previous timer.
#[hook]
pub fn use_notice_board() -> (UseReducerHandle<NoticeBoard>, NoticeCallback) {
    let board = use_reducer(NoticeBoard::default);
    let timer = use_mut_ref(|| DismissTimer::new(BrowserSchedule));

    {
        let timer = timer.clone();
        use_effect_with_deps(move |_| move || timer.borrow_mut().cancel(), ());
    }

    let show = {
        let board = board.clone();
        Callback::from(move |(form, kind, text): (FormKind, NoticeKind, String)| {
            let expire = board.clone();
            let id = timer.borrow_mut().arm(move |id| {
                expire.dispatch(NoticeAction::Expire(id));
            });
            board.dispatch(NoticeAction::Show(Notice { id, form, kind, text }));
        })
    };

    (board, show)
}

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
}

#[function_component]
pub fn NoticeBanner(props: &NoticeBannerProps) -> Html {
    match &props.notice {
        Some(notice) => html! {
            <div class={classes!("form-message", notice.kind.class())} role="status">
                {&notice.text}
            </div>
        },
        None => html! {},
    }
}
