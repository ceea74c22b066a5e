//! Allwinner A64.

use super::RawEntry;

pub(crate) const A64_BANKS: &[(char, u32)] = &[
    ('B', 10),
    ('C', 17),
    ('D', 25),
    ('E', 18),
    ('F', 7),
    ('G', 14),
    ('H', 12),
    ('L', 13),
];

pub(crate) const A64_FUNCTIONS: &[RawEntry] = &[
    ("PB0", &["UART2_TX", "", "JTAG_MS0", "", "PB_EINT0"]),
    ("PB1", &["UART2_RX", "", "JTAG_CK0", "SIM_PWREN", "PB_EINT1"]),
    ("PB2", &["UART2_RTS", "", "JTAG_DO0", "SIM_VPPEN", "PB_EINT2"]),
    ("PB3", &["UART2_CTS", "I2S0_MCLK", "JTAG_DI0", "SIM_VPPPP", "PB_EINT3"]),
    ("PB4", &["AIF2_SYNC", "PCM0_SYNC", "", "SIM_CLK", "PB_EINT4"]),
    ("PB5", &["AIF2_BCLK", "PCM0_BCLK", "", "SIM_DATA", "PB_EINT5"]),
    ("PB6", &["AIF2_DOUT", "PCM0_DOUT", "", "SIM_RST", "PB_EINT6"]),
    ("PB7", &["AIF2_DIN", "PCM0_DIN", "", "SIM_DET", "PB_EINT7"]),
    ("PB8", &["", "", "UART0_TX", "", "PB_EINT8"]),
    ("PB9", &["", "", "UART0_RX", "", "PB_EINT9"]),
    ("PC0", &["NAND_WE", "", "SPI0_MOSI"]),
    ("PC1", &["NAND_ALE", "SDC2_DS", "SPI0_MISO"]),
    ("PC2", &["NAND_CLE", "", "SPI0_CLK"]),
    ("PC3", &["NAND_CE1", "", "SPI0_CS"]),
    ("PC4", &["NAND_CE0"]),
    ("PH0", &["TWI0_SCK", "", "", "", "PH_EINT0"]),
    ("PH1", &["TWI0_SDA", "", "", "", "PH_EINT1"]),
    ("PH2", &["TWI1_SCK", "", "", "", "PH_EINT2"]),
    ("PH3", &["TWI1_SDA", "", "", "", "PH_EINT3"]),
    ("PL0", &["S_RSB_SCK", "S_TWI_SCK", "", "", "S_PL_EINT0"]),
    ("PL1", &["S_RSB_SDA", "S_TWI_SDA", "", "", "S_PL_EINT1"]),
    ("PL2", &["S_UART_TX", "", "", "", "S_PL_EINT2"]),
    ("PL3", &["S_UART_RX", "", "", "", "S_PL_EINT3"]),
];
