//! Win32 pet window.
//!
//! A borderless layered tool window. Frames are pushed with
//! `UpdateLayeredWindow` from a premultiplied BGRA DIB section, so fully
//! transparent pixels are click-through and the rest hit-test normally.

use std::cell::RefCell;

use tracing::debug;
use windows::core::w;
use windows::Win32::Foundation::{COLORREF, HWND, LPARAM, LRESULT, POINT, SIZE, WPARAM};
use windows::Win32::Graphics::Gdi::{
    CreateCompatibleDC, CreateDIBSection, DeleteDC, DeleteObject, GetDC, ReleaseDC, SelectObject,
    BITMAPINFO, BITMAPINFOHEADER, BI_RGB, BLENDFUNCTION, DIB_RGB_COLORS,
};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::HiDpi::{
    SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};
use windows::Win32::UI::Input::KeyboardAndMouse::VK_ESCAPE;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetSystemMetrics,
    LoadCursorW, PeekMessageW, RegisterClassW, SetWindowPos, ShowWindow, TranslateMessage,
    UpdateLayeredWindow, CS_HREDRAW, CS_VREDRAW, HWND_NOTOPMOST, HWND_TOPMOST, IDC_ARROW, MSG,
    PM_REMOVE, SM_CXSCREEN, SM_CYSCREEN, SWP_ASYNCWINDOWPOS, SWP_NOACTIVATE, SWP_NOMOVE,
    SWP_NOSIZE, SWP_NOZORDER, SW_SHOWNOACTIVATE, ULW_ALPHA, WM_CLOSE, WM_KEYDOWN, WM_LBUTTONDOWN,
    WM_RBUTTONDOWN, WNDCLASSW, WS_EX_LAYERED, WS_EX_TOOLWINDOW, WS_POPUP,
};

use crate::animation::Frame;
use crate::error::{PetError, Result};
use crate::events::{EventPublisher, PetEvent};
use crate::model::{Point, Size, FALLBACK_SCREEN};
use crate::window::WindowBinding;

thread_local! {
    /// Publisher of the loop currently pumping; the window procedure has
    /// no other way to reach it.
    static PUBLISHER: RefCell<Option<EventPublisher>> = const { RefCell::new(None) };
}

/// Opt into per-monitor DPI so window coordinates are physical pixels.
pub fn enable_dpi_awareness() {
    unsafe {
        if let Err(e) = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) {
            debug!(error = %e, "DPI awareness already set");
        }
    }
}

/// Primary monitor size.
pub fn primary_screen() -> Size {
    let (w, h) = unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };
    if w > 0 && h > 0 {
        Size::new(w, h)
    } else {
        Size::new(FALLBACK_SCREEN.0, FALLBACK_SCREEN.1)
    }
}

pub struct Win32Window {
    hwnd: Option<HWND>,
    origin: Point,
    size: Size,
    screen: Size,
}

impl Win32Window {
    pub fn new() -> Self {
        Self {
            hwnd: None,
            origin: Point::default(),
            size: Size::new(0, 0),
            screen: primary_screen(),
        }
    }

    fn hwnd(&self) -> Result<HWND> {
        self.hwnd
            .ok_or_else(|| PetError::Window("window not created".into()))
    }
}

impl Default for Win32Window {
    fn default() -> Self {
        Self::new()
    }
}

fn win_err(e: windows::core::Error) -> PetError {
    PetError::Window(e.to_string())
}

impl WindowBinding for Win32Window {
    fn create(&mut self, origin: Point, size: Size) -> Result<()> {
        self.release();
        unsafe {
            let instance = GetModuleHandleW(None).map_err(win_err)?;
            let class_name = w!("SchnauzerPet");
            let wc = WNDCLASSW {
                style: CS_HREDRAW | CS_VREDRAW,
                lpfnWndProc: Some(pet_wndproc),
                hInstance: instance.into(),
                hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
                lpszClassName: class_name,
                ..Default::default()
            };
            // Zero means already registered by an earlier create.
            let _ = RegisterClassW(&wc);

            let hwnd = CreateWindowExW(
                WS_EX_LAYERED | WS_EX_TOOLWINDOW,
                class_name,
                w!("Schnauzer Pet"),
                WS_POPUP,
                origin.x,
                origin.y,
                size.width,
                size.height,
                None,
                None,
                Some(instance.into()),
                None,
            )
            .map_err(win_err)?;
            let _ = ShowWindow(hwnd, SW_SHOWNOACTIVATE);
            self.hwnd = Some(hwnd);
        }
        self.origin = origin;
        self.size = size;
        debug!(x = origin.x, y = origin.y, "pet window created");
        Ok(())
    }

    fn move_to(&mut self, origin: Point) -> Result<()> {
        let hwnd = self.hwnd()?;
        unsafe {
            SetWindowPos(
                hwnd,
                None,
                origin.x,
                origin.y,
                0,
                0,
                SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE | SWP_ASYNCWINDOWPOS,
            )
            .map_err(win_err)?;
        }
        self.origin = origin;
        Ok(())
    }

    fn set_topmost(&mut self, on: bool) -> Result<()> {
        let hwnd = self.hwnd()?;
        let after = if on { HWND_TOPMOST } else { HWND_NOTOPMOST };
        unsafe {
            SetWindowPos(
                hwnd,
                Some(after),
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
            )
            .map_err(win_err)
        }
    }

    fn present(&mut self, frame: &Frame) -> Result<()> {
        let hwnd = self.hwnd()?;
        unsafe { update_layered(hwnd, self.origin, frame) }
    }

    fn release(&mut self) {
        if let Some(hwnd) = self.hwnd.take() {
            unsafe {
                let _ = DestroyWindow(hwnd);
            }
            debug!("pet window destroyed");
        }
    }

    fn pump(&mut self, events: &EventPublisher) {
        PUBLISHER.with(|p| *p.borrow_mut() = Some(events.clone()));
        unsafe {
            let mut msg = MSG::default();
            while PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE).as_bool() {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }
    }

    fn screen_size(&self) -> Size {
        self.screen
    }
}

impl Drop for Win32Window {
    fn drop(&mut self) {
        self.release();
    }
}

/// Copy `frame` into a top-down 32-bit DIB and hand it to the compositor.
unsafe fn update_layered(hwnd: HWND, origin: Point, frame: &Frame) -> Result<()> {
    let width = frame.width() as i32;
    let height = frame.height() as i32;
    let screen_dc = GetDC(None);
    let mem_dc = CreateCompatibleDC(Some(screen_dc));

    let bmi = BITMAPINFO {
        bmiHeader: BITMAPINFOHEADER {
            biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
            biWidth: width,
            biHeight: -height,
            biPlanes: 1,
            biBitCount: 32,
            biCompression: BI_RGB.0,
            ..Default::default()
        },
        ..Default::default()
    };

    let mut bits: *mut std::ffi::c_void = std::ptr::null_mut();
    let bitmap = match CreateDIBSection(Some(mem_dc), &bmi, DIB_RGB_COLORS, &mut bits, None, 0) {
        Ok(b) if !bits.is_null() => b,
        Ok(b) => {
            let _ = DeleteObject(b.into());
            let _ = DeleteDC(mem_dc);
            ReleaseDC(None, screen_dc);
            return Err(PetError::Window("DIB section has no pixels".into()));
        }
        Err(e) => {
            let _ = DeleteDC(mem_dc);
            ReleaseDC(None, screen_dc);
            return Err(win_err(e));
        }
    };

    let pixels = frame.to_premultiplied_bgra();
    std::ptr::copy_nonoverlapping(pixels.as_ptr(), bits as *mut u8, pixels.len());
    let old_bitmap = SelectObject(mem_dc, bitmap.into());

    let pt_src = POINT { x: 0, y: 0 };
    let pt_dst = POINT {
        x: origin.x,
        y: origin.y,
    };
    let size = SIZE {
        cx: width,
        cy: height,
    };
    let blend = BLENDFUNCTION {
        BlendOp: 0,
        BlendFlags: 0,
        SourceConstantAlpha: 255,
        AlphaFormat: 1,
    };

    let result = UpdateLayeredWindow(
        hwnd,
        Some(screen_dc),
        Some(&pt_dst),
        Some(&size),
        Some(mem_dc),
        Some(&pt_src),
        COLORREF(0),
        Some(&blend),
        ULW_ALPHA,
    );

    SelectObject(mem_dc, old_bitmap);
    let _ = DeleteObject(bitmap.into());
    let _ = DeleteDC(mem_dc);
    ReleaseDC(None, screen_dc);
    result.map_err(win_err)
}

fn publish(event: PetEvent) {
    PUBLISHER.with(|p| {
        if let Some(publisher) = p.borrow().as_ref() {
            publisher.publish(event);
        }
    });
}

extern "system" fn pet_wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    match msg {
        WM_LBUTTONDOWN => {
            publish(PetEvent::Interact);
            LRESULT(0)
        }
        WM_RBUTTONDOWN => {
            publish(PetEvent::OpenZoneEditor);
            LRESULT(0)
        }
        WM_KEYDOWN if wparam.0 == VK_ESCAPE.0 as usize => {
            publish(PetEvent::Close);
            LRESULT(0)
        }
        // The loop owns the window's lifetime; closing is just a request.
        WM_CLOSE => {
            publish(PetEvent::Close);
            LRESULT(0)
        }
        _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}
