use async_trait::async_trait;

use crate::error::Error;

/// A single page of a list response.
pub trait Page {
    /// The continuation token. `None` or an empty string means this is the last page.
    fn next_page_token(&self) -> Option<&str>;
}

/// A list call that can be driven page by page.
#[async_trait]
pub trait Paginated: Send + Sync {
    type Page: Page + Send;

    fn current_page_token(&self) -> Option<String>;

    fn set_page_token(&mut self, token: Option<String>);

    /// Executes the call once with the current page token.
    async fn fetch_page(&self) -> Result<Self::Page, Error>;

    /// Invokes `f` for each page of results, starting from the current page token.
    ///
    /// Stops when `f` returns an error or the last page was delivered. The page token the call had
    /// before `pages` is restored afterwards so the call can be reused.
    async fn pages<F, E>(&mut self, mut f: F) -> Result<(), E>
    where
        F: FnMut(Self::Page) -> Result<(), E> + Send,
        E: From<Error> + Send,
    {
        let original = self.current_page_token();
        let result = loop {
            let page = match self.fetch_page().await {
                Ok(page) => page,
                Err(err) => break Err(E::from(err)),
            };
            let next = page
                .next_page_token()
                .filter(|token| !token.is_empty())
                .map(str::to_string);
            if let Err(err) = f(page) {
                break Err(err);
            }
            match next {
                Some(token) => self.set_page_token(Some(token)),
                None => break Ok(()),
            }
        };
        self.set_page_token(original);
        result
    }
}

#[cfg(test)]
mod test {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::Error;
    use crate::paging::{Page, Paginated};

    struct NumberPage {
        values: Vec<usize>,
        next_page_token: Option<String>,
    }

    impl Page for NumberPage {
        fn next_page_token(&self) -> Option<&str> {
            self.next_page_token.as_deref()
        }
    }

    /// Serves `pages` pages; page `i` is requested with token `t{i}` and returns `t{i+1}`.
    struct NumberCall {
        pages: usize,
        page_token: Option<String>,
        requested: Mutex<Vec<Option<String>>>,
        fail_at: Option<usize>,
    }

    impl NumberCall {
        fn new(pages: usize) -> Self {
            Self {
                pages,
                page_token: None,
                requested: Mutex::new(vec![]),
                fail_at: None,
            }
        }
    }

    #[async_trait]
    impl Paginated for NumberCall {
        type Page = NumberPage;

        fn current_page_token(&self) -> Option<String> {
            self.page_token.clone()
        }

        fn set_page_token(&mut self, token: Option<String>) {
            self.page_token = token;
        }

        async fn fetch_page(&self) -> Result<NumberPage, Error> {
            self.requested.lock().unwrap().push(self.page_token.clone());
            let index = match &self.page_token {
                None => 0,
                Some(token) => token.trim_start_matches('t').parse::<usize>().unwrap(),
            };
            if self.fail_at == Some(index) {
                return Err(Error::Cancelled);
            }
            let next_page_token = if index + 1 < self.pages {
                Some(format!("t{}", index + 1))
            } else {
                Some(String::new())
            };
            Ok(NumberPage {
                values: vec![index],
                next_page_token,
            })
        }
    }

    #[tokio::test]
    async fn test_pages_visits_every_page() {
        let mut call = NumberCall::new(3);
        let mut seen = vec![];
        call.pages(|page| {
            seen.extend(page.values);
            Ok::<(), Error>(())
        })
        .await
        .unwrap();
        assert_eq!(vec![0, 1, 2], seen);
        assert_eq!(
            vec![None, Some("t1".to_string()), Some("t2".to_string())],
            *call.requested.lock().unwrap()
        );
        assert_eq!(None, call.page_token);
    }

    #[tokio::test]
    async fn test_pages_restores_initial_token() {
        let mut call = NumberCall::new(4);
        call.page_token = Some("t2".to_string());
        let mut count = 0;
        call.pages(|_| {
            count += 1;
            Ok::<(), Error>(())
        })
        .await
        .unwrap();
        assert_eq!(2, count);
        assert_eq!(Some("t2".to_string()), call.page_token);
    }

    #[derive(Debug)]
    enum StopError {
        Stop,
        Api(Error),
    }

    impl From<Error> for StopError {
        fn from(e: Error) -> Self {
            StopError::Api(e)
        }
    }

    #[tokio::test]
    async fn test_pages_stops_on_callback_error() {
        let mut call = NumberCall::new(5);
        let mut count = 0;
        let result = call
            .pages(|page| {
                count += 1;
                if page.values[0] == 1 {
                    Err(StopError::Stop)
                } else {
                    Ok(())
                }
            })
            .await;
        assert!(matches!(result, Err(StopError::Stop)));
        assert_eq!(2, count);
        assert_eq!(2, call.requested.lock().unwrap().len());
        assert_eq!(None, call.page_token);
    }

    #[tokio::test]
    async fn test_pages_stops_on_call_error() {
        let mut call = NumberCall::new(5);
        call.fail_at = Some(2);
        let mut count = 0;
        let result = call
            .pages(|_| {
                count += 1;
                Ok::<(), StopError>(())
            })
            .await;
        assert!(matches!(result, Err(StopError::Api(Error::Cancelled))));
        assert_eq!(2, count);
        assert_eq!(None, call.page_token);
    }
}
