//! Allwinner A20.

use super::RawEntry;

pub(crate) const A20_BANKS: &[(char, u32)] = &[
    ('A', 18),
    ('B', 24),
    ('C', 25),
    ('D', 28),
    ('E', 12),
    ('F', 6),
    ('G', 12),
    ('H', 28),
    ('I', 22),
];

pub(crate) const A20_FUNCTIONS: &[RawEntry] = &[
    ("PA0", &["ERXD3", "SPI1_CS0", "UART2_RTS", "GRXD3"]),
    ("PA1", &["ERXD2", "SPI1_CLK", "UART2_CTS", "GRXD2"]),
    ("PA2", &["ERXD1", "SPI1_MOSI", "UART2_TX", "GRXD1"]),
    ("PA3", &["ERXD0", "SPI1_MISO", "UART2_RX", "GRXD0"]),
    ("PB0", &["TWI0_SCK"]),
    ("PB1", &["TWI0_SDA"]),
    ("PB2", &["PWM0"]),
    ("PB3", &["IR0_TX", "", "SPDIF_MCLK", "", "STANBYWFI"]),
    ("PC0", &["NAND_WE", "SPI0_MOSI"]),
    ("PC1", &["NAND_ALE", "SPI0_MISO"]),
    ("PC2", &["NAND_CLE", "SPI0_CLK"]),
    ("PC3", &["NAND_CE1"]),
    ("PC4", &["NAND_CE0"]),
    ("PD14", &[""]),
    ("PH0", &["LCD1_D0", "", "UART3_TX", "", "PH_EINT0"]),
    ("PH1", &["LCD1_D1", "", "UART3_RX", "", "PH_EINT1"]),
    ("PH2", &["LCD1_D2", "", "UART3_RTS", "", "PH_EINT2"]),
    ("PH3", &["LCD1_D3", "", "UART3_CTS", "", "PH_EINT3"]),
    ("PH21", &["LCD1_D21", "", "SMC_VCCEN", "PH_EINT21"]),
    ("PI10", &["SPI0_CS0", "UART5_TX", "", "", "PI_EINT22"]),
    ("PI11", &["SPI0_CLK", "UART5_RX", "", "", "PI_EINT23"]),
    ("PI12", &["SPI0_MOSI", "UART6_TX", "", "CLK_OUT_A", "PI_EINT24"]),
    ("PI13", &["SPI0_MISO", "UART6_RX", "", "CLK_OUT_B", "PI_EINT25"]),
];
