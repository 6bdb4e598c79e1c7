//! お客様の声スライダー
//!
//! 画面幅 768px 以上で2枚、未満で1枚ずつ表示する。
//! ページ数は `slides - per_view + 1`（最後のページで右端が揃う）。
//! 自動送りは最後のページから先頭に戻る。利用者がページ送りを操作したら自動送りを止める。

pub const WIDE_BREAKPOINT_PX: u32 = 768;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialRotator {
    slides: usize,
    per_view: usize,
    page: usize,
    autoplay: bool,
}

impl TestimonialRotator {
    pub fn new(slides: usize, viewport_width_px: u32) -> Self {
        let mut rotator = Self {
            slides,
            per_view: 1,
            page: 0,
            autoplay: slides > 1,
        };
        rotator.resize(viewport_width_px);
        rotator
    }

    pub fn slides_per_view_for(viewport_width_px: u32) -> usize {
        if viewport_width_px >= WIDE_BREAKPOINT_PX {
            2
        } else {
            1
        }
    }

    /// 画面幅の変更。ページ番号は範囲内に丸める
    pub fn resize(&mut self, viewport_width_px: u32) {
        self.per_view = Self::slides_per_view_for(viewport_width_px)
            .min(self.slides)
            .max(1);
        self.page = self.page.min(self.page_count().saturating_sub(1));
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_view(&self) -> usize {
        self.per_view
    }

    pub fn page_count(&self) -> usize {
        if self.slides == 0 {
            0
        } else {
            self.slides + 1 - self.per_view
        }
    }

    /// 現在表示しているスライドの範囲
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        self.page..(self.page + self.per_view).min(self.slides)
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }

    /// 自動送りの1ステップ。最後のページの次は先頭
    pub fn tick(&mut self) -> bool {
        if !self.autoplay || self.page_count() <= 1 {
            return false;
        }
        self.page = (self.page + 1) % self.page_count();
        true
    }

    /// ページ送りの操作。自動送りは止まる
    pub fn go_to(&mut self, page: usize) {
        if self.autoplay {
            log::debug!("testimonial autoplay stopped by interaction");
        }
        self.autoplay = false;
        if page < self.page_count() {
            self.page = page;
        }
    }

    pub fn next(&mut self) {
        let last = self.page_count().saturating_sub(1);
        self.go_to((self.page + 1).min(last));
    }

    pub fn prev(&mut self) {
        self.go_to(self.page.saturating_sub(1));
    }
}
