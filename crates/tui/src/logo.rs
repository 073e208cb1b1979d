/// ASCII portrait for the greeting card, generated from a photograph.
/// Rendered with a vertical gradient; the glyph ramp runs from sparse
/// (`;:,.`) to dense (`S#@`).
pub const PORTRAIT: &str = r";;;;;;;;;;;;+++;::::::::::;+*+;:;;;;;;;++++++;;+*?*+++;;;++*
;;;;;;;;;;;;+++;::::::;*%SSS#SSSSS%?+;::::::::::+**+;;;;+++*
++;;;;+;;;;;+*++;;;;?S#@@@@##@@@@@@@S?;:,,,,,,,:;*++;;::;;++
+++++++++++++*+;:::?@@@@@@@@@@@#@@@@###+.,,,,,,,;*+;:::::;;+
++++++;;:::;;;:,,.,#@@@@#%???*++*?S####*,,,,,,,:;*+;;;;;;;;+
:::::;;:::::;;:,...S@@#%?*++;;;;+**S@@S:.......,:*+;;:::::;+
,,,,:::::::::;:,...+@S?%%%%?*+**???%@#:.........:+;:,,:::,:;
,,,,,:::,,,,:::,...:#??%%%%%?*%SSS%?S+ ........,:+:..,,,...,
,,,,,::,,,,,,::,...,%%*++***++**+**?*..........,:+:,,:;:,,:;
,,,,,::,,,,,,::,....+%??%#SS%%%%%**%:..........,:+;:::;;;;;;
,,,,,::,,,,,,::,,,,,.?%?%S%***?%S%%+........,,,,:++++++++;;;
,,,,,::,,,,,,::,,,,.,*#S%????**??%;......,,,,,,,:++++++++;;+
::;;;;;;:::,:::,...;%;%#@#S%%%S##*;,,.......,,,,:++;;;;;;;;+
*****+++;;;;:;;+*?S#@+,*%#@####%;,S#%%?*;;:,,...:;;;:::;;;;+
*****+;:;+**?%S#@@@###:,,:;*??:..:S#######SS%?*+++;::::::;;;
*++;+**?%S###########@%,,:*%SS%*,:################%;:;;;;;;+
**+%##################@+,;%###?;::S################%+++++++*
%%%####################S,..*##*..,S#################?+++++**
#SS####################@?,,?#S#*.,S##################*****??
#SS######@###############;,?#SSS,,S##################S****?%
SS########@##############%,?#SSS+,S###################%**??*
*%########@@##############;*#SSS?,%#############@######*++++
*S@#######@@@#############%+#SSSS,?@############@######%++;;
+S@########@@@########@####*SSSS#;*@###########@@@######****
+S@########@@@@########@###SS#SS#**@#########@@@@#######%++*
+S@#######@@@@@@@@@##@##@########%*@##@######@@@@@@#####S+++
+S@##@@@@@##@@@@@@@@@@@#@@##@####S?###@@####@@@@@@@@@@@##?++";
