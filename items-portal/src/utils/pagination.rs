use serde::{Deserialize, Serialize};

/// 分页栏默认显示的页码数量
pub const DEFAULT_WINDOW_SIZE: u64 = 5;

/// 查询参数原样接收字符串，解析失败时回落到第一页而不是返回 400
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PaginationParams {
    /// 缺失、无法解析或为 0 时返回 1
    pub fn page(&self) -> u64 {
        parse_positive(self.page.as_deref()).unwrap_or(1)
    }

    pub fn limit_or(&self, default: u64) -> u64 {
        parse_positive(self.limit.as_deref()).unwrap_or(default)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).filter(|v| *v > 0)
}

/// 一页条目及上游给出的总数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

impl<T> Paginated<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

pub fn total_pages(total_items: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// 以当前页为中心的页码窗口
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationWindow {
    pub current_page: u64,
    pub start_page: u64,
    pub end_page: u64,
    pub total_pages: u64,
    pub page_numbers: Vec<u64>,
}

/// 当前页不做范围校验，由调用方保证。
///
/// 窗口先以当前页居中，越过最后一页时整体左移，且不会小于 1。
/// `total_pages` 或 `window_size` 为 0 时页码列表为空。
pub fn compute_window(current_page: u64, total_pages: u64, window_size: u64) -> PaginationWindow {
    if window_size == 0 {
        return PaginationWindow {
            current_page,
            start_page: 1,
            end_page: 0,
            total_pages,
            page_numbers: Vec::new(),
        };
    }

    let mut start_page = current_page.saturating_sub(window_size / 2).max(1);
    // 页码来自用户输入，可能接近 u64::MAX
    let mut end_page = start_page.saturating_add(window_size - 1);
    if end_page > total_pages {
        end_page = total_pages;
        start_page = end_page.saturating_sub(window_size - 1).max(1);
    }

    PaginationWindow {
        current_page,
        start_page,
        end_page,
        total_pages,
        page_numbers: (start_page..=end_page).collect(),
    }
}

impl PaginationWindow {
    pub fn for_items(current_page: u64, total_items: u64, page_size: u64, window_size: u64) -> Self {
        compute_window(current_page, total_pages(total_items, page_size), window_size)
    }

    pub fn show_first(&self) -> bool {
        self.current_page > 1
    }

    pub fn show_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn show_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn show_last(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn leading_ellipsis(&self) -> bool {
        self.start_page > 1
    }

    pub fn trailing_ellipsis(&self) -> bool {
        self.end_page < self.total_pages
    }

    pub fn prev_page(&self) -> u64 {
        self.current_page.saturating_sub(1).max(1)
    }

    pub fn next_page(&self) -> u64 {
        self.current_page.saturating_add(1)
    }

    pub fn is_current(&self, page: u64) -> bool {
        page == self.current_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_is_contiguous_and_contains_current() {
        for total in 1..=30u64 {
            for window in 1..=7u64 {
                for current in 1..=total {
                    let w = compute_window(current, total, window);
                    assert_eq!(w.page_numbers.len() as u64, window.min(total));
                    assert!(w.page_numbers.contains(&current), "{current}/{total} w={window}");
                    assert!(w.start_page >= 1);
                    assert!(w.end_page <= total);
                    assert!(w.page_numbers.windows(2).all(|p| p[1] == p[0] + 1));
                }
            }
        }
    }

    #[test]
    fn test_single_page() {
        let w = compute_window(1, 1, DEFAULT_WINDOW_SIZE);
        assert_eq!(w.page_numbers, vec![1]);
        assert!(!w.show_first());
        assert!(!w.show_prev());
        assert!(!w.show_next());
        assert!(!w.show_last());
        assert!(!w.leading_ellipsis());
        assert!(!w.trailing_ellipsis());
    }

    #[test]
    fn test_window_near_start() {
        let w = compute_window(3, 20, 5);
        assert_eq!(w.page_numbers, vec![1, 2, 3, 4, 5]);
        assert!(!w.leading_ellipsis());
        assert!(w.trailing_ellipsis());
    }

    #[test]
    fn test_window_in_middle() {
        let w = compute_window(10, 20, 5);
        assert_eq!(w.page_numbers, vec![8, 9, 10, 11, 12]);
        assert!(w.leading_ellipsis());
        assert!(w.trailing_ellipsis());
        assert_eq!(w.prev_page(), 9);
        assert_eq!(w.next_page(), 11);
    }

    #[test]
    fn test_window_clamped_at_end() {
        let w = compute_window(19, 20, 5);
        assert_eq!(w.page_numbers, vec![16, 17, 18, 19, 20]);
        assert!(w.show_next());
        assert!(!w.trailing_ellipsis());

        let w = compute_window(20, 20, 5);
        assert_eq!(w.page_numbers, vec![16, 17, 18, 19, 20]);
        assert!(!w.show_next());
        assert!(!w.show_last());
    }

    #[test]
    fn test_no_pages() {
        let w = compute_window(1, 0, 5);
        assert!(w.page_numbers.is_empty());
        assert!(!w.show_next());
        assert!(!w.trailing_ellipsis());
    }

    #[test]
    fn test_current_past_last_page_is_not_clamped() {
        let w = compute_window(50, 10, 5);
        assert_eq!(w.current_page, 50);
        assert_eq!(w.page_numbers, vec![6, 7, 8, 9, 10]);
        assert!(w.show_prev());
        assert!(!w.show_next());
    }

    #[test]
    fn test_even_window_size() {
        let w = compute_window(10, 20, 4);
        assert_eq!(w.page_numbers, vec![8, 9, 10, 11]);
    }

    #[test]
    fn test_zero_window_size() {
        let w = compute_window(3, 10, 0);
        assert!(w.page_numbers.is_empty());
        assert_eq!(w.start_page, 1);
        assert_eq!(w.end_page, 0);
    }

    #[test]
    fn test_huge_current_page_does_not_overflow() {
        let w = compute_window(u64::MAX, 10, 5);
        assert_eq!(w.page_numbers, vec![6, 7, 8, 9, 10]);
        assert!(!w.show_next());
        assert_eq!(w.next_page(), u64::MAX);

        let w = compute_window(u64::MAX - 1, 20, 5);
        assert_eq!(w.page_numbers, vec![16, 17, 18, 19, 20]);

        let w = compute_window(u64::MAX - 1, u64::MAX, 5);
        assert_eq!(w.end_page, u64::MAX);
        assert_eq!(w.page_numbers.len(), 5);
        assert!(w.page_numbers.contains(&(u64::MAX - 1)));
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(100, 10), 10);
        assert_eq!(total_pages(101, 10), 11);
        assert_eq!(total_pages(5, 0), 0);

        let w = PaginationWindow::for_items(1, 100, 10, 5);
        assert_eq!(w.total_pages, 10);
        assert_eq!(w.page_numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_page_param_defaults() {
        let params = |page: Option<&str>| PaginationParams {
            page: page.map(str::to_string),
            limit: None,
        };
        assert_eq!(params(None).page(), 1);
        assert_eq!(params(Some("abc")).page(), 1);
        assert_eq!(params(Some("0")).page(), 1);
        assert_eq!(params(Some("-3")).page(), 1);
        assert_eq!(params(Some("7")).page(), 7);
        assert_eq!(params(None).limit_or(10), 10);
    }
}
