//! Full-screen GDI surface for the zone editor.
//!
//! Runs its own modal message loop, the same way the settings dialog of a
//! tray app would, and translates mouse and keyboard messages into
//! [`EditorInput`].

use std::cell::RefCell;

use tracing::{debug, warn};
use windows::core::w;
use windows::Win32::Foundation::{COLORREF, HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    BeginPaint, BitBlt, CreateCompatibleBitmap, CreateCompatibleDC, CreateSolidBrush, DeleteDC,
    DeleteObject, DrawTextW, EndPaint, FillRect, FrameRect, InvalidateRect, SelectObject,
    SetBkMode, SetTextColor, DT_CENTER, DT_SINGLELINE, DT_VCENTER, HDC, PAINTSTRUCT, SRCCOPY,
    TRANSPARENT,
};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Input::KeyboardAndMouse::{ReleaseCapture, SetCapture, VK_ESCAPE, VK_RETURN};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetMessageW, LoadCursorW,
    RegisterClassW, SetForegroundWindow, SetLayeredWindowAttributes, ShowWindow,
    TranslateMessage, CS_HREDRAW, CS_VREDRAW, IDC_ARROW, LWA_ALPHA, MSG, SW_SHOW, WM_CLOSE,
    WM_ERASEBKGND, WM_KEYDOWN, WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MOUSEMOVE, WM_PAINT, WNDCLASSW,
    WS_EX_LAYERED, WS_EX_TOPMOST, WS_POPUP,
};

use crate::editor::{
    EditorButton, EditorInput, EditorKey, EditorOutcome, EditorSurface, Target, ZoneEditor,
    ZoneHandles, ZonePart,
};
use crate::model::{Point, Rect, EDITOR_ALPHA, TASKBAR_HEIGHT};

struct Session {
    editor: ZoneEditor,
    outcome: Option<EditorOutcome>,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

/// Modal editor window covering the primary screen.
#[derive(Debug, Default)]
pub struct GdiEditor;

impl EditorSurface for GdiEditor {
    fn run(&mut self, editor: ZoneEditor) -> EditorOutcome {
        let screen = editor.screen();
        SESSION.with(|s| {
            *s.borrow_mut() = Some(Session {
                editor,
                outcome: None,
            })
        });

        let hwnd = unsafe { open_window(screen.width, screen.height) };
        let Some(hwnd) = hwnd else {
            SESSION.with(|s| s.borrow_mut().take());
            return EditorOutcome::Cancel;
        };

        unsafe {
            let mut msg = MSG::default();
            while GetMessageW(&mut msg, None, 0, 0).as_bool() {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
                if finished() {
                    break;
                }
            }
            let _ = DestroyWindow(hwnd);
        }

        let outcome = SESSION
            .with(|s| s.borrow_mut().take())
            .and_then(|session| session.outcome)
            .unwrap_or(EditorOutcome::Cancel);
        debug!(?outcome, "editor closed");
        outcome
    }
}

fn finished() -> bool {
    SESSION.with(|s| s.borrow().as_ref().map_or(true, |session| session.outcome.is_some()))
}

unsafe fn open_window(width: i32, height: i32) -> Option<HWND> {
    let instance = GetModuleHandleW(None).ok()?;
    let class_name = w!("SchnauzerZoneEditor");
    let wc = WNDCLASSW {
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(editor_wndproc),
        hInstance: instance.into(),
        hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
        lpszClassName: class_name,
        ..Default::default()
    };
    let _ = RegisterClassW(&wc);

    let hwnd = match CreateWindowExW(
        WS_EX_LAYERED | WS_EX_TOPMOST,
        class_name,
        w!("Zone Editor"),
        WS_POPUP,
        0,
        0,
        width,
        height,
        None,
        None,
        Some(instance.into()),
        None,
    ) {
        Ok(h) => h,
        Err(e) => {
            warn!(error = %e, "failed to create zone editor window");
            return None;
        }
    };
    let _ = SetLayeredWindowAttributes(hwnd, COLORREF(0), EDITOR_ALPHA, LWA_ALPHA);
    let _ = ShowWindow(hwnd, SW_SHOW);
    let _ = SetForegroundWindow(hwnd);
    Some(hwnd)
}

fn point_from(lparam: LPARAM) -> Point {
    let x = (lparam.0 & 0xFFFF) as u16 as i16 as i32;
    let y = ((lparam.0 >> 16) & 0xFFFF) as u16 as i16 as i32;
    Point::new(x, y)
}

/// Feed one input; repaint when the session is still going.
fn feed(hwnd: HWND, input: EditorInput) {
    let done = SESSION.with(|s| {
        let mut slot = s.borrow_mut();
        let Some(session) = slot.as_mut() else {
            return true;
        };
        if session.outcome.is_none() {
            session.outcome = session.editor.handle(input);
        }
        session.outcome.is_some()
    });
    if !done {
        unsafe {
            let _ = InvalidateRect(Some(hwnd), None, false);
        }
    }
}

extern "system" fn editor_wndproc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_LBUTTONDOWN => {
            unsafe {
                SetCapture(hwnd);
            }
            feed(hwnd, EditorInput::PointerDown(point_from(lparam)));
            LRESULT(0)
        }
        WM_LBUTTONUP => {
            unsafe {
                let _ = ReleaseCapture();
            }
            feed(hwnd, EditorInput::PointerUp);
            LRESULT(0)
        }
        WM_MOUSEMOVE => {
            feed(hwnd, EditorInput::PointerMove(point_from(lparam)));
            LRESULT(0)
        }
        WM_KEYDOWN => {
            let key = wparam.0 as u16;
            if key == VK_ESCAPE.0 {
                feed(hwnd, EditorInput::Key(EditorKey::Escape));
            } else if key == VK_RETURN.0 {
                feed(hwnd, EditorInput::Key(EditorKey::Enter));
            }
            LRESULT(0)
        }
        WM_CLOSE => {
            feed(hwnd, EditorInput::Close);
            LRESULT(0)
        }
        WM_ERASEBKGND => LRESULT(1),
        WM_PAINT => {
            unsafe { paint(hwnd) };
            LRESULT(0)
        }
        _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}

// === Painting ===

const fn rgb(r: u8, g: u8, b: u8) -> COLORREF {
    COLORREF(r as u32 | (g as u32) << 8 | (b as u32) << 16)
}

const BACKGROUND: COLORREF = rgb(20, 20, 30);
const TASKBAR: COLORREF = rgb(40, 40, 50);
const ZONE_FILL: COLORREF = rgb(40, 100, 40);
const ZONE_FILL_ACTIVE: COLORREF = rgb(60, 140, 60);
const ZONE_BORDER: COLORREF = rgb(80, 200, 80);
const ZONE_BORDER_ACTIVE: COLORREF = rgb(100, 255, 100);
const HANDLE: COLORREF = rgb(200, 150, 50);
const HANDLE_ACTIVE: COLORREF = rgb(255, 220, 120);
const DELETE: COLORREF = rgb(150, 50, 50);
const WHITE: COLORREF = rgb(255, 255, 255);

fn button_color(button: EditorButton) -> COLORREF {
    match button {
        EditorButton::Save => rgb(40, 120, 40),
        EditorButton::Cancel => rgb(120, 40, 40),
        EditorButton::AddZone => rgb(60, 60, 120),
        EditorButton::AddPet => rgb(120, 80, 200),
    }
}

fn win_rect(r: Rect) -> RECT {
    RECT {
        left: r.x,
        top: r.y,
        right: r.x + r.width,
        bottom: r.y + r.height,
    }
}

unsafe fn fill(hdc: HDC, r: Rect, color: COLORREF) {
    let brush = CreateSolidBrush(color);
    FillRect(hdc, &win_rect(r), brush);
    let _ = DeleteObject(brush.into());
}

unsafe fn frame(hdc: HDC, r: Rect, color: COLORREF, thickness: i32) {
    let brush = CreateSolidBrush(color);
    for i in 0..thickness {
        let inset = Rect::new(r.x + i, r.y + i, r.width - 2 * i, r.height - 2 * i);
        FrameRect(hdc, &win_rect(inset), brush);
    }
    let _ = DeleteObject(brush.into());
}

unsafe fn label(hdc: HDC, r: Rect, text: &str) {
    let mut wide: Vec<u16> = text.encode_utf16().collect();
    let mut rect = win_rect(r);
    DrawTextW(hdc, &mut wide, &mut rect, DT_CENTER | DT_VCENTER | DT_SINGLELINE);
}

unsafe fn paint(hwnd: HWND) {
    let mut ps = PAINTSTRUCT::default();
    let hdc = BeginPaint(hwnd, &mut ps);

    SESSION.with(|s| {
        if let Some(session) = s.borrow().as_ref() {
            let screen = session.editor.screen();
            let mem_dc = CreateCompatibleDC(Some(hdc));
            let bitmap = CreateCompatibleBitmap(hdc, screen.width, screen.height);
            let old = SelectObject(mem_dc, bitmap.into());

            draw_editor(mem_dc, &session.editor);

            let _ = BitBlt(
                hdc,
                0,
                0,
                screen.width,
                screen.height,
                Some(mem_dc),
                0,
                0,
                SRCCOPY,
            );
            SelectObject(mem_dc, old);
            let _ = DeleteObject(bitmap.into());
            let _ = DeleteDC(mem_dc);
        }
    });

    let _ = EndPaint(hwnd, &ps);
}

unsafe fn draw_editor(hdc: HDC, editor: &ZoneEditor) {
    let screen = editor.screen();
    fill(hdc, Rect::new(0, 0, screen.width, screen.height), BACKGROUND);

    let taskbar = Rect::new(0, screen.height - TASKBAR_HEIGHT, screen.width, TASKBAR_HEIGHT);
    fill(hdc, taskbar, TASKBAR);
    frame(hdc, taskbar, rgb(100, 100, 100), 2);

    SetBkMode(hdc, TRANSPARENT);
    SetTextColor(hdc, WHITE);
    label(
        hdc,
        Rect::new(0, 20, screen.width, 30),
        "ZONE EDITOR - Set where the pet can walk",
    );
    label(
        hdc,
        Rect::new(0, 55, screen.width, 20),
        "Drag handles to resize | Drag zone to move | Click X to delete | Enter saves, Esc cancels",
    );

    let layout = editor.layout();
    for button in EditorButton::ALL {
        let r = layout.rect(button);
        fill(hdc, r, button_color(button));
        label(hdc, r, button.label());
    }

    for (index, zone) in editor.zones().iter().enumerate() {
        let handles = ZoneHandles::of(zone);
        let body_active = editor.is_active(Target {
            index,
            part: ZonePart::Body,
        });
        fill(
            hdc,
            handles.body,
            if body_active { ZONE_FILL_ACTIVE } else { ZONE_FILL },
        );
        frame(
            hdc,
            handles.body,
            if body_active { ZONE_BORDER_ACTIVE } else { ZONE_BORDER },
            if body_active { 4 } else { 3 },
        );

        for (part, r) in [(ZonePart::LeftEdge, handles.left), (ZonePart::RightEdge, handles.right)] {
            let active = editor.is_active(Target { index, part });
            fill(hdc, r, if active { HANDLE_ACTIVE } else { HANDLE });
            frame(hdc, r, WHITE, if active { 3 } else { 2 });
        }

        if editor.can_delete() {
            fill(hdc, handles.delete, DELETE);
            label(hdc, handles.delete, "x");
        }

        let text = format!(
            "Zone {}: x:{}-{} y:{} h:{}",
            index + 1,
            zone.x_start,
            zone.x_end,
            zone.y,
            zone.height
        );
        label(hdc, handles.body, &text);
    }
}
