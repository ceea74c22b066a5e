//! Allwinner H3.
//!
//! Source: H3 datasheet, port controller multiplex function tables.

use super::RawEntry;

pub(crate) const H3_BANKS: &[(char, u32)] = &[
    ('A', 22),
    ('C', 19),
    ('D', 18),
    ('E', 16),
    ('F', 7),
    ('G', 14),
    ('L', 12),
];

pub(crate) const H3_FUNCTIONS: &[RawEntry] = &[
    ("PA0", &["UART2_TX", "JTAG_MS", "", "", "PA_EINT0"]),
    ("PA1", &["UART2_RX", "JTAG_CK", "", "", "PA_EINT1"]),
    ("PA2", &["UART2_RTS", "JTAG_DO", "", "", "PA_EINT2"]),
    ("PA3", &["UART2_CTS", "JTAG_DI", "", "", "PA_EINT3"]),
    ("PA4", &["UART0_TX", "", "", "", "PA_EINT4"]),
    ("PA5", &["UART0_RX", "PWM0", "", "", "PA_EINT5"]),
    ("PA6", &["SIM_PWREN", "", "", "", "PA_EINT6"]),
    ("PA7", &["SIM_CLK", "", "", "", "PA_EINT7"]),
    ("PA8", &["SIM_DATA", "", "", "", "PA_EINT8"]),
    ("PA9", &["SIM_RST", "", "", "", "PA_EINT9"]),
    ("PA10", &["SIM_DET", "", "", "", "PA_EINT10"]),
    ("PA11", &["TWI0_SCK", "DI_TX", "", "", "PA_EINT11"]),
    ("PA12", &["TWI0_SDA", "DI_RX", "", "", "PA_EINT12"]),
    ("PA13", &["SPI1_CS", "UART3_TX", "", "", "PA_EINT13"]),
    ("PA14", &["SPI1_CLK", "UART3_RX", "", "", "PA_EINT14"]),
    ("PA15", &["SPI1_MOSI", "UART3_RTS", "", "", "PA_EINT15"]),
    ("PA16", &["SPI1_MISO", "UART3_CTS", "", "", "PA_EINT16"]),
    ("PA17", &["OWA_OUT", "", "", "", "PA_EINT17"]),
    ("PA18", &["PCM0_SYNC", "TWI1_SCK", "", "", "PA_EINT18"]),
    ("PA19", &["PCM0_CLK", "TWI1_SDA", "", "", "PA_EINT19"]),
    ("PA20", &["PCM0_DOUT", "SIM_VPPEN", "", "", "PA_EINT20"]),
    ("PA21", &["PCM0_DIN", "SIM_VPPPP", "", "", "PA_EINT21"]),
    ("PC0", &["NAND_WE", "SPI0_MOSI"]),
    ("PC1", &["NAND_ALE", "SPI0_MISO"]),
    ("PC2", &["NAND_CLE", "SPI0_CLK"]),
    ("PC3", &["NAND_CE1", "SPI0_CS"]),
    ("PC4", &["NAND_CE0"]),
    ("PG6", &["UART1_TX", "", "", "", "PG_EINT6"]),
    ("PG7", &["UART1_RX", "", "", "", "PG_EINT7"]),
    ("PG8", &["UART1_RTS", "", "", "", "PG_EINT8"]),
    ("PG9", &["UART1_CTS", "", "", "", "PG_EINT9"]),
    ("PL0", &["S_TWI_SCK", "", "", "", "S_PL_EINT0"]),
    ("PL1", &["S_TWI_SDA", "", "", "", "S_PL_EINT1"]),
    ("PL2", &["S_UART_TX", "", "", "", "S_PL_EINT2"]),
    ("PL3", &["S_UART_RX", "", "", "", "S_PL_EINT3"]),
    ("PL4", &["S_JTAG_MS", "", "", "", "S_PL_EINT4"]),
];
