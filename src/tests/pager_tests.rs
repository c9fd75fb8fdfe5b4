//! 分页容器单元测试
//! 测试拖拽、惯性翻页、吸附动画和跳页的事件序列

use crate::ui::{PageContainer, PageEvent, ScrollState};

/// 测试拖拽事件序列
#[test]
fn test_drag_emits_scroll_events() {
    let mut pager = PageContainer::new(3, 300.0);

    pager.begin_drag(300.0, 0);
    assert_eq!(pager.drain_events(), vec![PageEvent::ScrollStateChanged(ScrollState::Dragging)]);

    pager.update_drag(225.0, 16);
    assert_eq!(
        pager.drain_events(),
        vec![PageEvent::Scrolled { position: 0, offset: 0.25, offset_px: 75.0 }]
    );
    assert_eq!(pager.scroll_x(), 75.0);
}

/// 测试拖拽不超出首尾页
#[test]
fn test_drag_clamped() {
    let mut pager = PageContainer::new(2, 300.0);
    pager.begin_drag(100.0, 0);
    pager.update_drag(400.0, 16);
    assert_eq!(pager.scroll_x(), 0.0);

    pager.update_drag(-900.0, 32);
    assert_eq!(pager.scroll_x(), 300.0);
}

/// 测试慢速松手回到最近的页
#[test]
fn test_slow_release_settles_to_nearest() {
    let mut pager = PageContainer::new(3, 300.0);
    pager.begin_drag(300.0, 0);
    pager.update_drag(200.0, 500);
    pager.drain_events();

    pager.end_drag();
    assert_eq!(pager.drain_events(), vec![PageEvent::ScrollStateChanged(ScrollState::Settling)]);

    while pager.update(0.016) {}
    let events = pager.drain_events();
    assert_eq!(
        events[events.len() - 2..],
        [
            PageEvent::Scrolled { position: 0, offset: 0.0, offset_px: 0.0 },
            PageEvent::ScrollStateChanged(ScrollState::Idle),
        ]
    );
    assert_eq!(pager.current_item(), 0);
}

/// 测试快速滑动翻到下一页，松手即选中
#[test]
fn test_fling_selects_next_page_on_release() {
    let mut pager = PageContainer::new(3, 300.0);
    pager.begin_drag(300.0, 0);
    pager.update_drag(260.0, 50);
    pager.drain_events();

    pager.end_drag();
    assert_eq!(
        pager.drain_events(),
        vec![
            PageEvent::PageSelected(1),
            PageEvent::ScrollStateChanged(ScrollState::Settling),
        ]
    );
    assert_eq!(pager.current_item(), 1);

    assert!(!pager.update(0.3));
    assert_eq!(
        pager.drain_events(),
        vec![
            PageEvent::Scrolled { position: 1, offset: 0.0, offset_px: 0.0 },
            PageEvent::ScrollStateChanged(ScrollState::Idle),
        ]
    );
    assert_eq!(pager.scroll_x(), 300.0);
}

/// 测试反向快速滑动
#[test]
fn test_fling_backwards() {
    let mut pager = PageContainer::new(3, 300.0);
    pager.set_current_item(2, false);
    pager.begin_drag(0.0, 0);
    pager.update_drag(40.0, 50);
    pager.end_drag();
    assert_eq!(pager.current_item(), 1);
}

/// 测试直接跳页
#[test]
fn test_set_current_item_jump() {
    let mut pager = PageContainer::new(3, 300.0);
    pager.set_current_item(2, false);
    assert_eq!(
        pager.drain_events(),
        vec![
            PageEvent::PageSelected(2),
            PageEvent::Scrolled { position: 2, offset: 0.0, offset_px: 0.0 },
        ]
    );
    assert_eq!(pager.scroll_x(), 600.0);
    assert_eq!(pager.scroll_state(), ScrollState::Idle);
}

/// 测试越界下标被夹到最后一页
#[test]
fn test_set_current_item_clamped() {
    let mut pager = PageContainer::new(3, 300.0);
    pager.set_current_item(10, false);
    assert_eq!(pager.current_item(), 2);
}

/// 测试平滑跳页
#[test]
fn test_set_current_item_smooth() {
    let mut pager = PageContainer::new(3, 300.0);
    pager.set_current_item(1, true);
    assert_eq!(
        pager.drain_events(),
        vec![
            PageEvent::PageSelected(1),
            PageEvent::ScrollStateChanged(ScrollState::Settling),
        ]
    );
    assert!(pager.update(0.1));
    assert!(pager.scroll_x() > 0.0 && pager.scroll_x() < 300.0);
    while pager.update(0.1) {}
    assert_eq!(pager.scroll_x(), 300.0);
}

/// 测试可见页及其偏移
#[test]
fn test_visible_pages() {
    let mut pager = PageContainer::new(3, 300.0);
    assert_eq!(pager.visible_pages(), vec![(0, 0.0)]);

    pager.begin_drag(300.0, 0);
    pager.update_drag(150.0, 16);
    assert_eq!(pager.visible_pages(), vec![(0, -150.0), (1, 150.0)]);
}

/// 测试改变页宽保持当前页
#[test]
fn test_set_page_width() {
    let mut pager = PageContainer::new(3, 300.0);
    pager.set_current_item(1, false);
    pager.set_page_width(400.0);
    assert_eq!(pager.scroll_x(), 400.0);
    assert_eq!(pager.page_width(), 400.0);
}

/// 测试空容器
#[test]
fn test_empty_pager() {
    let mut pager = PageContainer::new(0, 300.0);
    pager.begin_drag(0.0, 0);
    pager.set_current_item(1, false);
    assert!(pager.drain_events().is_empty());
    assert!(pager.visible_pages().is_empty());
    assert_eq!(pager.page_count(), 0);
}
