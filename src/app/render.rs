// Delayed grid renders. Every request takes a fresh token; only the newest token may commit,
// so a quick succession of filter clicks always ends on the last one.

use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::catalog::{Catalog, TagFilter};
use crate::views::cards::CardView;

/// What the grid shows once a render commits.
#[derive(Debug, Clone, PartialEq)]
pub enum GridContent {
    Cards(Vec<CardView>),
    /// No item carries the requested tag.
    Empty { filter: TagFilter },
}

/// Pure render of the grid for a selection.
pub fn render_grid(catalog: &Catalog, filter: &TagFilter) -> GridContent {
    let cards: Vec<CardView> = catalog.filter(filter).map(CardView::from_restaurant).collect();
    if cards.is_empty() {
        GridContent::Empty {
            filter: filter.clone(),
        }
    } else {
        GridContent::Cards(cards)
    }
}

pub struct RenderMsg {
    pub token: u64,
    pub content: GridContent,
}

pub struct RenderQueue {
    counter: u64,
    committed: u64,
    pending: Option<JoinHandle<()>>,
    tx: mpsc::Sender<RenderMsg>,
    rx: mpsc::Receiver<RenderMsg>,
}

impl RenderQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            counter: 0,
            committed: 0,
            pending: None,
            tx,
            rx,
        }
    }

    /// Schedule a render of `filter` after `delay`, superseding any render still in flight.
    /// `wake` runs after the result is queued so the UI can repaint.
    pub fn request<W>(
        &mut self,
        rt: &Handle,
        catalog: Arc<Catalog>,
        filter: TagFilter,
        delay: Duration,
        wake: W,
    ) -> u64
    where
        W: Fn() + Send + 'static,
    {
        if let Some(prev) = self.pending.take() {
            prev.abort();
        }
        self.counter = self.counter.wrapping_add(1);
        let token = self.counter;
        log::debug!("render #{token} requested: filter={filter} delay={delay:?}");

        let tx = self.tx.clone();
        self.pending = Some(rt.spawn(async move {
            tokio::time::sleep(delay).await;
            let content = render_grid(&catalog, &filter);
            let _ = tx.send(RenderMsg { token, content });
            wake();
        }));
        token
    }

    /// True while the newest request has not committed yet.
    pub fn is_loading(&self) -> bool {
        self.committed != self.counter
    }

    pub fn latest_token(&self) -> u64 {
        self.counter
    }

    /// Drain finished renders and return the content of the newest one, if it arrived.
    pub fn poll(&mut self) -> Option<GridContent> {
        let mut latest = None;
        while let Ok(msg) = self.rx.try_recv() {
            if let Some(content) = self.accept(msg) {
                latest = Some(content);
            }
        }
        latest
    }

    fn accept(&mut self, msg: RenderMsg) -> Option<GridContent> {
        if msg.token != self.counter {
            log::debug!(
                "render #{} superseded by #{}, dropped",
                msg.token,
                self.counter
            );
            return None;
        }
        self.committed = msg.token;
        self.pending = None;
        Some(msg.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::restaurant;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::new(vec![
                restaurant(1, &["Spicy", "Family"]),
                restaurant(2, &["Family"]),
            ])
            .unwrap(),
        )
    }

    fn card_ids(content: &GridContent) -> Vec<u32> {
        match content {
            GridContent::Cards(cards) => cards.iter().map(|c| c.id).collect(),
            GridContent::Empty { .. } => Vec::new(),
        }
    }

    #[test]
    fn renders_cards_in_collection_order() {
        let c = catalog();
        assert_eq!(card_ids(&render_grid(&c, &TagFilter::All)), vec![1, 2]);
        assert_eq!(card_ids(&render_grid(&c, &TagFilter::from("Family"))), vec![1, 2]);
        assert_eq!(card_ids(&render_grid(&c, &TagFilter::from("Spicy"))), vec![1]);
    }

    #[test]
    fn no_match_renders_empty_state() {
        let c = catalog();
        assert_eq!(
            render_grid(&c, &TagFilter::from("Vegan")),
            GridContent::Empty {
                filter: TagFilter::from("Vegan")
            }
        );
    }

    #[test]
    fn stale_tokens_never_commit() {
        let mut q = RenderQueue::new();
        q.counter = 3;
        let stale = RenderMsg {
            token: 2,
            content: GridContent::Cards(Vec::new()),
        };
        assert!(q.accept(stale).is_none());
        assert!(q.is_loading());

        let fresh = RenderMsg {
            token: 3,
            content: GridContent::Empty {
                filter: TagFilter::All,
            },
        };
        assert!(q.accept(fresh).is_some());
        assert!(!q.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn commits_after_delay() {
        let mut q = RenderQueue::new();
        let wakes = Arc::new(AtomicUsize::new(0));
        let w = wakes.clone();
        q.request(
            &Handle::current(),
            catalog(),
            TagFilter::from("Spicy"),
            Duration::from_millis(300),
            move || {
                w.fetch_add(1, Ordering::SeqCst);
            },
        );
        assert!(q.is_loading());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(q.poll().is_none());
        assert!(q.is_loading());

        tokio::time::sleep(Duration::from_millis(250)).await;
        let content = q.poll().expect("render should have committed");
        assert_eq!(card_ids(&content), vec![1]);
        assert!(!q.is_loading());
        assert_eq!(wakes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn last_selection_wins() {
        let mut q = RenderQueue::new();
        let rt = Handle::current();
        let delay = Duration::from_millis(300);
        q.request(&rt, catalog(), TagFilter::from("Spicy"), delay, || {});
        tokio::time::sleep(Duration::from_millis(200)).await;
        let last = q.request(&rt, catalog(), TagFilter::All, delay, || {});

        // The first request would have fired here; it was aborted.
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(q.poll().is_none());

        tokio::time::sleep(Duration::from_millis(200)).await;
        let content = q.poll().expect("latest render should commit");
        assert_eq!(card_ids(&content), vec![1, 2]);
        assert_eq!(q.latest_token(), last);
        assert!(!q.is_loading());
    }
}
