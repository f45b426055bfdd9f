//! Reset path for the 6502 build.
//!
//! The CPU fetches [`_VECTOR_TABLE`] from the top of ROM. Reset lands in
//! `__boot`, which relocates `.data`, zeroes `.bss`, points the soft stack at
//! the top of RAM and hands over to [`init`] with interrupts still disabled.
//! The font bitmap and the interrupt shims are provided at link time.

use core::panic::PanicInfo;

use log::warn;
use volatile_register::WO;

use crate::console::Vdp;
use crate::port::VdpPorts;
use crate::regs::{FONT_SIZE, STATUS_PORT_ADDR};
use crate::timing::DisplayMode;

unsafe extern "C" {
    /// `cli` wrapper from the startup assembly.
    unsafe fn irq_enable();

    /// Bare `rti`.
    unsafe fn return_from_interrupt();

    unsafe static FONT: [u8; FONT_SIZE];

    unsafe static mut __rc0: u8;
    unsafe static mut __rc1: u8;

    unsafe static __data_load: u8;
    unsafe static mut __data_start: u8;
    unsafe static mut __data_end: u8;

    unsafe static mut __bss_start: u8;
    unsafe static mut __bss_end: u8;
}

#[panic_handler]
fn panic(_panic: &PanicInfo<'_>) -> ! {
    loop {}
}

/// Nothing is wired to NMI or IRQ yet, so both just return.
#[unsafe(link_section = ".vector_table")]
#[unsafe(no_mangle)]
pub static _VECTOR_TABLE: [unsafe extern "C" fn(); 3] = [
    return_from_interrupt, // NMI
    __boot,                // Reset
    return_from_interrupt, // IRQ/BRK
];

const SOFT_STACK_TOP: u16 = 0x1FFF;

#[unsafe(no_mangle)]
unsafe extern "C" fn __boot() {
    unsafe {
        init_data_and_bss();
        init_stack();
    }
    // soft stack is live from here on; init must stay out of line
    init();
}

#[inline(always)]
unsafe fn init_data_and_bss() {
    unsafe {
        let mut src = &raw const __data_load;
        let mut dst = &raw mut __data_start;
        let end = &raw mut __data_end;
        while dst < end {
            dst.write_volatile(src.read_volatile());
            src = src.add(1);
            dst = dst.add(1);
        }

        let mut bss = &raw mut __bss_start;
        let bss_end = &raw mut __bss_end;
        while bss < bss_end {
            bss.write_volatile(0);
            bss = bss.add(1);
        }
    }
}

#[inline(always)]
unsafe fn init_stack() {
    let [lo, hi] = SOFT_STACK_TOP.to_le_bytes();
    unsafe {
        __rc0 = lo;
        __rc1 = hi;
    }
}

/// Heartbeat byte at `$8400`.
#[repr(C)]
struct StatusPort {
    value: WO<u8>,
}

impl StatusPort {
    unsafe fn new() -> &'static mut StatusPort {
        unsafe { &mut *(STATUS_PORT_ADDR as *mut StatusPort) }
    }
}

const FRAME_ATTR: u8 = 0x1F;
const TEXT_ATTR: u8 = 0x07;

/// Bring the screen up, then spin on the heartbeat.
#[inline(never)]
pub fn init() -> ! {
    unsafe { irq_enable() };

    let mut vdp = Vdp::init(unsafe { VdpPorts::new() }, DisplayMode::DEFAULT);
    if let Err(e) = vdp.load_font(unsafe { &*(&raw const FONT) }) {
        warn!("font not loaded: {}", e);
    }
    vdp.clear(b' ', TEXT_ATTR);

    let geo = *vdp.geometry();
    if let Err(e) = vdp.draw_box(0, 0, geo.columns() as u16, geo.rows() as u16, FRAME_ATTR) {
        warn!("frame not drawn: {}", e);
    }

    let status = unsafe { StatusPort::new() };
    let mut ctr: u8 = 0;
    loop {
        ctr = ctr.wrapping_add(1);
        unsafe { status.value.write(ctr) };
    }
}
